//! Data view configuration.
//!
//! [`DataViewConfig`] holds the settings a [`DataView`](crate::DataView) is
//! created with. It can be built in code or loaded from TOML or JSON:
//!
//! ```toml
//! page_size = 25
//! page_window = 7
//! locale = "de-DE"
//! min_search_len = 2
//!
//! [initial_sort]
//! key = "name"
//! direction = "asc"
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::Path;

use horizon_dataview_core::dataview_warn;
use horizon_dataview_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{DEFAULT_PAGE_WINDOW, SortDirective};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// On-disk format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format.
    Json,
    /// TOML format.
    Toml,
}

impl ConfigFormat {
    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(ConfigFormat::Json)
        } else if ext.eq_ignore_ascii_case("toml") {
            Some(ConfigFormat::Toml)
        } else {
            None
        }
    }
}

/// Settings for a data view.
///
/// # Example
///
/// ```
/// use horizon_dataview::{DataViewConfig, model::SortDirective};
///
/// let config = DataViewConfig::default()
///     .with_page_size(25)
///     .with_locale("sv-SE")
///     .with_initial_sort(SortDirective::descending("created"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataViewConfig {
    /// Rows per page, at least 1.
    pub page_size: usize,
    /// Maximum number of page buttons in the navigation window. Must be odd
    /// so the current page can sit in the middle.
    pub page_window: usize,
    /// BCP 47 locale for string collation. `None` uses the system locale.
    pub locale: Option<String>,
    /// Search terms shorter than this (after trimming) do not filter.
    pub min_search_len: usize,
    /// Sort applied when the view is created.
    pub initial_sort: Option<SortDirective>,
}

impl Default for DataViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_window: DEFAULT_PAGE_WINDOW,
            locale: None,
            min_search_len: 0,
            initial_sort: None,
        }
    }
}

impl DataViewConfig {
    /// Parses and validates a TOML config.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file, picking the format from its extension.
    ///
    /// Files without a `.json` or `.toml` extension are read as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).unwrap_or_else(|| {
            dataview_warn!(path = %path.display(), "unknown config extension, reading as TOML");
            ConfigFormat::Toml
        });
        Self::load_as(path, format)
    }

    /// Loads a config file in the given format.
    pub fn load_as(path: impl AsRef<Path>, format: ConfigFormat) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = match format {
            ConfigFormat::Json => Self::from_json_str(&text)?,
            ConfigFormat::Toml => Self::from_toml_str(&text)?,
        };
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            ?format,
            page_size = config.page_size,
            "loaded data view config"
        );
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::invalid("page_size", "must be at least 1"));
        }
        if self.page_window == 0 || self.page_window % 2 == 0 {
            return Err(ConfigError::invalid(
                "page_window",
                format!("must be an odd number of at least 1, got {}", self.page_window),
            ));
        }
        if let Some(sort) = &self.initial_sort
            && sort.key.trim().is_empty()
        {
            return Err(ConfigError::invalid("initial_sort.key", "must not be empty"));
        }
        Ok(())
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the page window width.
    pub fn with_page_window(mut self, page_window: usize) -> Self {
        self.page_window = page_window;
        self
    }

    /// Sets the collation locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the minimum search term length.
    pub fn with_min_search_len(mut self, min_search_len: usize) -> Self {
        self.min_search_len = min_search_len;
        self
    }

    /// Sets the initial sort.
    pub fn with_initial_sort(mut self, sort: SortDirective) -> Self {
        self.initial_sort = Some(sort);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortDirection;

    #[test]
    fn test_defaults() {
        let config = DataViewConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.page_window, 5);
        assert!(config.locale.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = DataViewConfig::from_toml_str("page_size = 3").unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.page_window, 5);
    }

    #[test]
    fn test_toml_initial_sort() {
        let text = r#"
            locale = "fr-FR"

            [initial_sort]
            key = "name"
            direction = "desc"
        "#;
        let config = DataViewConfig::from_toml_str(text).unwrap();
        assert_eq!(config.locale.as_deref(), Some("fr-FR"));
        let sort = config.initial_sort.unwrap();
        assert_eq!(sort.key, "name");
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn test_json() {
        let config =
            DataViewConfig::from_json_str(r#"{"page_size": 50, "min_search_len": 2}"#).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.min_search_len, 2);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            DataViewConfig::from_toml_str("page_size = 0"),
            Err(ConfigError::Invalid { field, .. }) if field == "page_size"
        ));
        assert!(DataViewConfig::default().with_page_window(4).validate().is_err());
        assert!(DataViewConfig::default().with_page_window(0).validate().is_err());
        assert!(DataViewConfig::default().with_page_window(7).validate().is_ok());
        assert!(
            DataViewConfig::default()
                .with_initial_sort(SortDirective::ascending(" "))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(
            DataViewConfig::from_toml_str("page_size = "),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            DataViewConfig::from_json_str("{"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/view.JSON")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new("view.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("view")), None);
    }
}
