use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for build-tags operations
#[derive(Error, Debug)]
pub enum TagError {
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("I/O error on '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Marker file error")]
    Marker(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Must supply -tag when -release is set")]
    MissingTag,
}

/// Convenience type alias for Results in build-tags
pub type Result<T> = std::result::Result<T, TagError>;

impl TagError {
    /// Create an invalid-format error with context
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        TagError::InvalidVersionFormat(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagError::Config(msg.into())
    }

    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TagError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures caused by a malformed version string
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, TagError::InvalidVersionFormat(_))
    }
}
