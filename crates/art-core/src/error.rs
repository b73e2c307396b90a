// File: crates/art-core/src/error.rs
// Summary: Error type shared by everything around the compositor (forms, uploads, store, surfaces).

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ArtError {
    #[error("invalid color '{0}': expected #RRGGBB")]
    InvalidColor(String),

    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("{0}")]
    UploadRejected(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("render surface error: {0}")]
    Surface(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("artwork not found: {0}")]
    NotFound(Uuid),

    #[error("async runtime unavailable: {0}")]
    Runtime(String),
}

impl ArtError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation { field, message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, ArtError>;
