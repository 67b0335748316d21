//! Runtime configuration of the dashboard.
//!
//! Values come from `data-*` attributes on `<body>` so a static host can
//! tweak them without rebuilding the wasm bundle:
//!
//! ```html
//! <body data-header-src="partials/header.html" data-log-level="info">
//! ```

use std::str::FromStr;

pub const DEFAULT_HEADER_SRC: &str = "header.html";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Relative URL of the header fragment injected at startup.
    pub header_include_url: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            header_include_url: DEFAULT_HEADER_SRC.to_string(),
            log_level: log::Level::Debug,
        }
    }
}

impl AppConfig {
    /// Reads overrides from the document body, falling back to defaults.
    pub fn load() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => Self::from_attrs(
                body.get_attribute("data-header-src"),
                body.get_attribute("data-log-level"),
            ),
            None => Self::default(),
        }
    }

    /// Blank or unparsable values keep the default.
    pub fn from_attrs(header_src: Option<String>, log_level: Option<String>) -> Self {
        let defaults = Self::default();
        let header_include_url = header_src
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.header_include_url);
        let log_level = log_level
            .and_then(|s| log::Level::from_str(s.trim()).ok())
            .unwrap_or(defaults.log_level);

        Self {
            header_include_url,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_attrs(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.header_include_url, "header.html");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_attrs(
            Some(" partials/header.html ".to_string()),
            Some("warn".to_string()),
        );
        assert_eq!(config.header_include_url, "partials/header.html");
        assert_eq!(config.log_level, log::Level::Warn);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_attrs(Some("   ".to_string()), Some("loud".to_string()));
        assert_eq!(config, AppConfig::default());
    }
}
