use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::{Document, Page, PageError};

/// Loads page by address, network access and page engine belong to host.
pub trait Loader {
    type Page: Page;

    fn load(&mut self, address: &str) -> Result<Self::Page, PageError>;
}

/// Pages kept in memory, bundled with application or prepared by tests.
#[derive(Default)]
pub struct StaticLoader {
    pages: HashMap<String, String>,
    requests: usize,
}

impl StaticLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, address: &str, html: &str) -> Self {
        self.pages.insert(address.to_string(), html.to_string());
        self
    }

    /// Number of load requests received, failed ones included.
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl Loader for StaticLoader {
    type Page = Document;

    fn load(&mut self, address: &str) -> Result<Document, PageError> {
        self.requests += 1;
        self.pages
            .get(address)
            .map(|html| Document::parse(html))
            .ok_or_else(|| PageError::AddressNotFound(address.to_string()))
    }
}

/// Reads local HTML files, addresses are paths with optional `file://` scheme.
pub struct FileLoader;

impl Loader for FileLoader {
    type Page = Document;

    fn load(&mut self, address: &str) -> Result<Document, PageError> {
        let path = address.strip_prefix("file://").unwrap_or(address);
        if path.is_empty() {
            return Err(PageError::AddressNotFound(address.to_string()));
        }
        let html = fs::read_to_string(Path::new(path))?;
        Ok(Document::parse(&html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_static_loader() {
        let mut loader = StaticLoader::new().page("app://index", "<p>Hi</p>");
        let document = loader.load("app://index").expect("page");
        assert!(document.find_first("p").is_ok());
        assert!(matches!(
            loader.load("app://missing"),
            Err(PageError::AddressNotFound(_))
        ));
        assert_eq!(loader.requests(), 2);
    }

    #[test]
    pub fn test_file_loader_missing_file() {
        let result = FileLoader.load("file:///definitely/not/here.html");
        assert!(matches!(result, Err(PageError::Io(_))));
        assert!(matches!(FileLoader.load("file://"), Err(PageError::AddressNotFound(_))));
    }
}
