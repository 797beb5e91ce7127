//! Booking store errors

use std::path::PathBuf;
use thiserror::Error;

pub type BookingResult<T> = Result<T, BookingError>;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Storage I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {collection} data: {source}")]
    Json {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{collection} record '{key}' already exists")]
    DuplicateKey { collection: String, key: String },

    #[error("{collection} record '{key}' not found")]
    NotFound { collection: String, key: String },

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl BookingError {
    pub(crate) fn not_found(collection: &str, key: &str) -> Self {
        BookingError::NotFound {
            collection: collection.to_string(),
            key: key.to_string(),
        }
    }
}
