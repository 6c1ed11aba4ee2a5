//! Error types for scene color block rendering.

use thiserror::Error;

/// Result type alias using SceneError.
pub type SceneResult<T> = Result<T, SceneError>;

/// Primary error type for normalization and rendering.
#[derive(Debug, Error)]
pub enum SceneError {
    // === Configuration Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // === Data Errors ===
    #[error("Malformed color entry at index {index}: {reason}")]
    MalformedEntry { index: usize, reason: String },

    // === Rendering Errors ===
    #[error("Image encoding failed: {0}")]
    Encode(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(String),
}

impl SceneError {
    /// Build a `MalformedEntry` for the entry at `index`.
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        SceneError::MalformedEntry {
            index,
            reason: reason.into(),
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for SceneError {
    fn from(err: std::io::Error) -> Self {
        SceneError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        SceneError::InvalidConfig(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for SceneError {
    fn from(err: serde_yaml::Error) -> Self {
        SceneError::InvalidConfig(format!("YAML error: {}", err))
    }
}
