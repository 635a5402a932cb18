//! FILENAME: core/persistence/src/error.rs

use registry::NormalizeError;
use thiserror::Error;

/// Dataset load failure. Any variant leaves the caller's previous snapshot
/// untouched - no partial snapshot is ever installed.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),
}
