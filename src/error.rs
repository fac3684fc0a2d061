//! Error types for docsnap operations

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocsnapError>;

#[derive(Error, Debug)]
pub enum DocsnapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid snapshot format in {path}: {message}")]
    Format { path: PathBuf, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

impl DocsnapError {
    pub fn format(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }

    /// True for structural problems in a snapshot document
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}
