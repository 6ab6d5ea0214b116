//! # Persistent Store
//!
//! Typed JSON get/set/remove over a pluggable [`KeyValueBackend`].
//!
//! The store never fails towards its caller. A missing key, a value that no longer
//! parses, or a backend I/O error all degrade to "no value" on read, and failed writes
//! are reported as `false`. Every degradation is logged with `tracing::warn!` so it is
//! still visible in the logs.
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`keys::CART`] | `Cart` (array of cart items) |
//! | [`keys::THEME`] | `ThemePreference` |
//! | [`keys::ORDERS`] | array of `Order` |
//! | [`keys::LAST_ORDER`] | `Order` |
//! | [`keys::PRIMARY_COLOR`], [`keys::SECONDARY_COLOR`], [`keys::ACCENT_COLOR`] | opaque strings |

pub mod backend;
pub mod error;
mod history;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use error::StorageError;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage keys shared by every component.
pub mod keys {
    pub const CART: &str = "cart";
    pub const THEME: &str = "theme";
    pub const ORDERS: &str = "orders";
    pub const LAST_ORDER: &str = "lastOrder";
    pub const PRIMARY_COLOR: &str = "primaryColor";
    pub const SECONDARY_COLOR: &str = "secondaryColor";
    pub const ACCENT_COLOR: &str = "accentColor";
}

/// Shared handle to the durable key-value store.
///
/// Cheap to clone; every clone talks to the same backend. Actors receive a clone in
/// their context.
#[derive(Clone)]
pub struct PersistentStore {
    backend: Arc<dyn KeyValueBackend>,
}

impl fmt::Debug for PersistentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentStore").finish_non_exhaustive()
    }
}

impl PersistentStore {
    pub fn new(backend: impl KeyValueBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// File-backed store rooted at `dir`, or in-memory when `dir` is `None`.
    ///
    /// Falls back to memory (with a warning) if the directory cannot be created.
    pub fn open(dir: Option<PathBuf>) -> Self {
        match dir {
            None => Self::in_memory(),
            Some(dir) => match FileBackend::open(dir) {
                Ok(backend) => Self::new(backend),
                Err(e) => {
                    warn!(error = %e, "Falling back to in-memory storage");
                    Self::in_memory()
                }
            },
        }
    }

    /// Read and decode `key`. `None` if absent, unreadable or malformed.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "Read failed");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(source) => {
                let e = StorageError::Serialization {
                    key: key.to_string(),
                    source,
                };
                warn!(key, error = %e, "Discarding malformed value");
                None
            }
        }
    }

    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.get(key).unwrap_or_default()
    }

    /// Encode and write `value` under `key`. Returns whether the write landed.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(source) => {
                let e = StorageError::Serialization {
                    key: key.to_string(),
                    source,
                };
                warn!(key, error = %e, "Write skipped");
                return false;
            }
        };
        match self.backend.write(key, &raw) {
            Ok(()) => {
                debug!(key, bytes = raw.len(), "Stored");
                true
            }
            Err(e) => {
                warn!(key, error = %e, "Write failed");
                false
            }
        }
    }

    /// Delete `key`. Returns whether the backend accepted the removal.
    pub fn remove(&self, key: &str) -> bool {
        match self.backend.delete(key) {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "Remove failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        compact: bool,
    }

    struct BrokenBackend;

    impl KeyValueBackend for BrokenBackend {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io {
                key: key.to_string(),
                source: std::io::Error::other("disk unplugged"),
            })
        }
        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
        fn delete(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let store = PersistentStore::in_memory();
        assert!(store.set("prefs", &Prefs { compact: true }));
        assert_eq!(store.get::<Prefs>("prefs"), Some(Prefs { compact: true }));

        assert!(store.remove("prefs"));
        assert_eq!(store.get::<Prefs>("prefs"), None);
    }

    #[test]
    fn test_malformed_value_degrades_to_default() {
        let backend = MemoryBackend::new();
        backend.write("prefs", "{not json").unwrap();
        let store = PersistentStore::new(backend);

        assert_eq!(store.get::<Prefs>("prefs"), None);
        assert_eq!(
            store.get_or("prefs", Prefs { compact: false }),
            Prefs { compact: false }
        );
        assert!(store.get_or_default::<Vec<u32>>("prefs").is_empty());
    }

    #[test]
    fn test_backend_failures_never_escape() {
        let store = PersistentStore::new(BrokenBackend);
        assert_eq!(store.get::<Prefs>("prefs"), None);
        assert!(!store.set("prefs", &Prefs { compact: true }));
        assert!(!store.remove("prefs"));
    }

    #[test]
    fn test_open_without_dir_is_in_memory() {
        let store = PersistentStore::open(None);
        assert!(store.set("k", "v"));
        assert_eq!(store.get::<String>("k").as_deref(), Some("v"));
    }
}
