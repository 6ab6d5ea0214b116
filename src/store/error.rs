//! Error types for the persistent store.

use thiserror::Error;

/// Failures of the durable key-value layer.
///
/// These never escape [`PersistentStore`](crate::store::PersistentStore): reads fall
/// back to a default and writes are logged. Backends return them so the store can
/// decide how to degrade.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the underlying medium failed.
    #[error("storage I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be encoded or decoded as JSON.
    #[error("malformed value for key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A backend lock was poisoned by a panicking writer.
    #[error("storage backend lock poisoned")]
    Poisoned,

    /// The key cannot be mapped onto the backend (e.g. path separators for files).
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}
