//! Client storage seam
//!
//! [`ClientStorage`] is the shape of a browser's `localStorage`: string keys,
//! string values, last write wins. The theme store only ever talks to this
//! trait, so the backing engine can be swapped for tests, for server-side
//! rendering, or for a disabled store.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::kv::{KvError, KvStore, Result};

/// Durable string key-value storage owned by the client
pub trait ClientStorage: Send + Sync {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`, if any
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: ClientStorage + ?Sized> ClientStorage for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

impl ClientStorage for KvStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.get(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.set(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.remove(key).map(|_| ())
    }
}

/// Volatile storage backed by a map
///
/// Clones share the same map, so a clone handed to a second store instance
/// behaves like the same browser profile after a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl ClientStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.write().remove(key);
        Ok(())
    }
}

/// Storage that refuses every operation, as when the user disabled site data
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStorage;

impl ClientStorage for DisabledStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Err(KvError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Err(KvError::Unavailable)
    }

    fn remove_item(&self, _key: &str) -> Result<()> {
        Err(KvError::Unavailable)
    }
}
