use std::io;

use ego_tree::NodeId;

#[derive(Debug)]
pub enum PageError {
    Io(io::Error),
    Settings(serde_json::Error),
    /// Stylesheet or inline style can't be parsed, message taken from the CSS parser.
    Css(String),
    Selector(String),
    ElementNotFound(NodeId),
    HeadNotFound,
    AddressNotFound(String),
}

impl From<io::Error> for PageError {
    fn from(error: io::Error) -> Self {
        PageError::Io(error)
    }
}

impl From<serde_json::Error> for PageError {
    fn from(error: serde_json::Error) -> Self {
        PageError::Settings(error)
    }
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageError::Io(error) => write!(f, "io error, {error}"),
            PageError::Settings(error) => write!(f, "invalid settings, {error}"),
            PageError::Css(error) => write!(f, "unable to parse css, {error}"),
            PageError::Selector(selector) => write!(f, "invalid selector {selector}"),
            PageError::ElementNotFound(node) => write!(f, "element {node:?} not found"),
            PageError::HeadNotFound => write!(f, "document head not found"),
            PageError::AddressNotFound(address) => write!(f, "address {address} not found"),
        }
    }
}

impl std::error::Error for PageError {}
