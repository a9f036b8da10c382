// src/error.rs
//
// Crate-wide error type.

use thiserror::Error;

/// Errors surfaced by noisecheckr.
///
/// Feature extraction never produces these: each feature has a fallback
/// value instead. Only configuration, buffer construction, decoding and I/O
/// can fail.
#[derive(Debug, Error)]
pub enum NoiseCheckError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("invalid sample buffer: {0}")]
    InvalidBuffer(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NoiseCheckError>;
