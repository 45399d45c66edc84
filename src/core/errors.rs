//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for smellhound operations
#[derive(Debug, Error)]
pub enum Error {
    /// File extension is not one of the supported kinds
    #[error("Unsupported file type: {extension}. Only .py and .java files are supported.")]
    UnsupportedFileKind { path: PathBuf, extension: String },

    /// Analysis errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Pattern errors
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}

impl Error {
    /// Create an unsupported-file-kind error from a path
    pub fn unsupported(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_else(|| "<none>".to_string());
        Self::UnsupportedFileKind { path, extension }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
