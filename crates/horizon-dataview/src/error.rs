//! Error types for Horizon Dataview.
//!
//! The view pipeline itself never fails. Errors only come from the surfaces
//! around it: loading configuration, declaring columns and exporting rows.

use std::path::PathBuf;

pub use horizon_dataview_core::SignalError;

/// Result type alias for fallible data-view operations.
pub type Result<T> = std::result::Result<T, DataviewError>;

/// Errors raised while loading or validating a [`DataViewConfig`](crate::DataViewConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or schema error.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value outside its allowed range.
    #[error("Invalid value for '{field}': {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a validation error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors raised while building a [`ColumnRegistry`](crate::model::ColumnRegistry).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    /// Two columns share a key.
    #[error("Duplicate column key '{0}'")]
    DuplicateKey(String),

    /// A column key is empty or whitespace.
    #[error("Column key must not be empty")]
    EmptyKey,
}

/// Errors raised while exporting rows.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Any error produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum DataviewError {
    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Column declaration error.
    #[error(transparent)]
    Column(#[from] ColumnError),

    /// Export error.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Signal error.
    #[error(transparent)]
    Signal(#[from] SignalError),
}
