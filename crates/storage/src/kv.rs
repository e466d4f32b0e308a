//! Key-value store for client preferences
//!
//! This module provides a small, durable key-value store using sled. Values
//! are stored as UTF-8 strings so the layout matches what a browser's
//! `localStorage` would hold, and keys are optionally namespaced
//! (e.g. `device:theme`).

use serde::{Deserialize, Serialize};
use sled::Db;
use std::sync::Arc;
use thiserror::Error;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Stored bytes were not valid UTF-8
    #[error("Invalid UTF-8 value for key {key}")]
    InvalidValue {
        /// Key whose value failed to decode
        key: String,
    },

    /// Invalid key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Storage is disabled or unreachable
    #[error("Storage unavailable")]
    Unavailable,
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Key-value store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Flush interval in milliseconds (None for immediate flush)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "site_kv.db".to_string(),
            cache_capacity: 8 * 1024 * 1024, // 8MB
            use_compression: true,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Key-value store implementation
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Db>,
    namespace: Option<String>,
    separator: &'static str,
}

impl std::fmt::Debug for KvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvStore")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl KvStore {
    /// Create a new key-value store with configuration
    pub fn new(config: KvConfig) -> Result<Self> {
        let mut db_config = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression);

        if let Some(ms) = config.flush_every_ms {
            db_config = db_config.flush_every_ms(Some(ms));
        }

        let db = db_config.open()?;
        tracing::debug!(path = %config.path, "opened key-value store");

        Ok(Self { db: Arc::new(db), namespace: None, separator: ":" })
    }

    /// Create an in-memory key-value store (for testing)
    pub fn in_memory() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;

        Ok(Self { db: Arc::new(db), namespace: None, separator: ":" })
    }

    /// View of the same database with every key prefixed by `namespace`
    pub fn with_namespace(&self, namespace: impl Into<String>) -> Self {
        Self {
            db: Arc::clone(&self.db),
            namespace: Some(namespace.into()),
            separator: self.separator,
        }
    }

    fn full_key(&self, key: &str) -> Result<String> {
        if key.is_empty() {
            return Err(KvError::InvalidKey(key.to_string()));
        }
        Ok(match &self.namespace {
            Some(ns) => format!("{}{}{}", ns, self.separator, key),
            None => key.to_string(),
        })
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let full_key = self.full_key(key)?;
        match self.db.get(full_key.as_bytes())? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|_| KvError::InvalidValue { key: full_key }),
            None => Ok(None),
        }
    }

    /// Set a value by key, overwriting any previous value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let full_key = self.full_key(key)?;
        self.db.insert(full_key.as_bytes(), value.as_bytes())?;
        Ok(())
    }

    /// Remove a value by key
    pub fn remove(&self, key: &str) -> Result<bool> {
        let full_key = self.full_key(key)?;
        Ok(self.db.remove(full_key.as_bytes())?.is_some())
    }

    /// Check if a key exists
    pub fn contains(&self, key: &str) -> Result<bool> {
        let full_key = self.full_key(key)?;
        Ok(self.db.contains_key(full_key.as_bytes())?)
    }

    /// Raw key prefix of this view: `namespace` plus separator, or empty
    fn namespace_prefix(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}{}", ns, self.separator),
            None => String::new(),
        }
    }

    /// Get all keys of this view with a given prefix
    ///
    /// Keys come back without the namespace, as passed to [`KvStore::set`].
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let namespace_prefix = self.namespace_prefix();
        let mut keys = Vec::new();

        for item in self.db.scan_prefix(format!("{}{}", namespace_prefix, prefix).as_bytes()) {
            let (key, _) = item?;
            if let Ok(key_str) = String::from_utf8(key.to_vec()) {
                keys.push(key_str[namespace_prefix.len()..].to_string());
            }
        }

        Ok(keys)
    }

    /// Clear all data of this view
    ///
    /// A namespaced view only removes its own keys.
    pub fn clear(&self) -> Result<()> {
        if self.namespace.is_none() {
            self.db.clear()?;
            return Ok(());
        }

        for item in self.db.scan_prefix(self.namespace_prefix().as_bytes()) {
            let (key, _) = item?;
            self.db.remove(key)?;
        }
        Ok(())
    }

    /// Flush pending writes to disk
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    /// Get the number of keys in this view
    pub fn len(&self) -> usize {
        match self.namespace {
            Some(_) => self.db.scan_prefix(self.namespace_prefix().as_bytes()).count(),
            None => self.db.len(),
        }
    }

    /// Check if this view is empty
    pub fn is_empty(&self) -> bool {
        match self.namespace {
            Some(_) => self.db.scan_prefix(self.namespace_prefix().as_bytes()).next().is_none(),
            None => self.db.is_empty(),
        }
    }
}
