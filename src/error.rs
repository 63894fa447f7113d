//! Application error types.

use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors for VisiText model metadata.
#[derive(Error, Debug)]
pub enum AppError {
    // File errors
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unsupported descriptor format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("Invalid descriptor {}: {message}", path.display())]
    Descriptor { path: PathBuf, message: String },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOON serialization error: {0}")]
    Toon(String),
}
