use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, writing, or decoding saved cards.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The saved-card sequence could not be encoded or decoded as JSON.
    #[error("saved cards are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A file-backed storage entry could not be read or written.
    #[error("storage i/o failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The durable storage backend is not reachable (no window, quota, poisoned lock).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A label that is not part of one of the closed option sets.
    #[error("'{value}' is not a valid {set}")]
    InvalidOption { set: &'static str, value: String },
}
