//! Storage error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of a storage backend.
///
/// [`ContentStore`](super::ContentStore) never hands these to callers; it
/// logs them and falls back to session-only storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("storage quota exceeded writing `{key}` ({needed} bytes, limit {limit})")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("record serialization failed")]
    Serialize(#[from] serde_json::Error),
}
