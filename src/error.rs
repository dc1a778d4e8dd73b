use std::path::PathBuf;

use thiserror::Error;

use crate::common::types::Curve;

pub type Result<T> = std::result::Result<T, KeygenError>;

/// Errors raised while generating, encoding or writing a private JWK.
#[derive(Debug, Error)]
pub enum KeygenError {
    #[error("unsupported algorithm '{0}'")]
    UnsupportedAlgorithm(String),

    #[error("unknown curve '{0}'")]
    UnknownCurve(String),

    /// The generated key could not be encoded. An unavailable OS RNG panics
    /// inside `OsRng` rather than surfacing here.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("private key does not match public coordinates on {0}")]
    KeyMismatch(Curve),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl KeygenError {
    pub(crate) fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        KeygenError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
