// web_app/error.rs - Error type for catalog operations

use thiserror::Error;

/// Failure of a catalog API call or of reading a chosen image file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to read image file: {0}")]
    FileRead(String),
}

impl CatalogError {
    /// HTTP status for API errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
