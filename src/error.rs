//! Error types for drillgrid.

use std::path::PathBuf;

/// Result type alias for drillgrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in drillgrid operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error while reading input.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The path where the error occurred, if known.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON input could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML input or configuration could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Theme name is not one of the recognized themes.
    #[error("Unknown theme '{name}' (expected Dark or Light)")]
    UnknownTheme {
        /// The rejected theme name.
        name: String,
    },

    /// Unsupported input format.
    #[error("Unsupported format: {format}")]
    UnsupportedFormat {
        /// The unsupported format name or extension.
        format: String,
    },

    /// Drill-down would exceed the navigation depth limit.
    #[error("Navigation depth limit of {limit} reached")]
    NavigationDepth {
        /// The configured maximum depth.
        limit: usize,
    },

    /// Row index out of bounds.
    #[error("Row index {index} out of bounds (total: {total})")]
    RowOutOfBounds {
        /// Requested row index.
        index: usize,
        /// Total row count.
        total: usize,
    },

    /// Column index out of bounds.
    #[error("Column index {index} out of bounds (total: {total})")]
    ColumnOutOfBounds {
        /// Requested column index.
        index: usize,
        /// Total column count.
        total: usize,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// Terminal I/O failure in the interactive viewer.
    #[error("Terminal error: {message}")]
    Terminal {
        /// Description of the terminal failure.
        message: String,
    },
}

impl Error {
    /// Create an I/O error with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Create an I/O error without path context.
    pub fn io_no_path(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }

    /// Create an unknown theme error.
    pub fn unknown_theme(name: impl Into<String>) -> Self {
        Self::UnknownTheme { name: name.into() }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create a terminal error.
    pub fn terminal(message: impl std::fmt::Display) -> Self {
        Self::Terminal {
            message: message.to_string(),
        }
    }
}
