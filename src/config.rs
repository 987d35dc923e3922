use serde::Deserialize;

use crate::{PageError, TextSizeLevel};

pub const DEFAULT_ADDRESS: &str = "https://github.com";

/// Settings of web view showcase, read from JSON like `{"address": "...", "level": "xxLarge"}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// The single page displayed by viewer, loaded again whenever scale changes.
    pub address: String,
    pub level: TextSizeLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            level: TextSizeLevel::Medium,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let settings = serde_json::from_str(json)?;
        Ok(settings)
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    pub fn level(mut self, level: TextSizeLevel) -> Self {
        self.level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_defaults() {
        let settings = Settings::from_json("{}").expect("valid settings");
        assert_eq!(settings.address, "https://github.com");
        assert_eq!(settings.level, TextSizeLevel::Medium);
    }

    #[test]
    pub fn test_read_settings() {
        let settings =
            Settings::from_json(r#"{"address": "file://page.html", "level": "accessibility4"}"#)
                .expect("valid settings");
        assert_eq!(settings, Settings::new().address("file://page.html").level(TextSizeLevel::Accessibility4));
    }

    #[test]
    pub fn test_unknown_level() {
        let settings = Settings::from_json(r#"{"level": "gigantic"}"#).expect("valid settings");
        assert_eq!(settings.level, TextSizeLevel::Unknown);
        assert_eq!(settings.level.scale().value(), 1.0);
    }

    #[test]
    pub fn test_invalid_json() {
        let result = Settings::from_json(r#"{"address": 42}"#);
        assert!(matches!(result, Err(PageError::Settings(_))));
    }
}
