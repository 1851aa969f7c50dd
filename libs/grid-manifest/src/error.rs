//! Error types for manifest handling.

use serde_json::Value;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ManifestError>;

/// Manifest shape errors.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest \"name\" is required and must be a non-empty string")]
    MissingName,

    #[error("manifest must be a JSON object")]
    NotAnObject,

    #[error("version must be a string or number, got: {0}")]
    InvalidVersion(Value),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
