//! Error types for oscil-format.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] oscil_model::ModelError),

    #[error("Unsupported spec version: {0}")]
    UnsupportedVersion(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
