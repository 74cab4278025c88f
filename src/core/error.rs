//! Error types for ignorescan

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ignorescan operations
#[derive(Error, Debug)]
pub enum ScanError {
    /// Pattern compilation errors
    #[error("Invalid ignore pattern '{pattern}': {reason}")]
    PatternCompilation { pattern: String, reason: String },

    /// Traversal errors
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scan cancelled at {path}")]
    Cancelled { path: PathBuf },

    /// Ignore file errors (a missing ignore file is not an error)
    #[error("Failed to read ignore file {path}: {source}")]
    IgnoreFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Create a new pattern compilation error
    pub fn pattern_compilation(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PatternCompilation {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create a new walk error
    pub fn walk(path: PathBuf, source: std::io::Error) -> Self {
        Self::Walk { path, source }
    }

    /// Create a new cancelled error
    pub fn cancelled(path: PathBuf) -> Self {
        Self::Cancelled { path }
    }

    /// Create a new ignore file read error
    pub fn ignore_file_read(path: PathBuf, source: std::io::Error) -> Self {
        Self::IgnoreFileRead { path, source }
    }
}

/// Result type alias for ignorescan operations
pub type Result<T> = std::result::Result<T, ScanError>;
