//! Site configuration
//!
//! Every field has a default, so an empty JSON object is a valid config:
//!
//! ```json
//! {
//!   "baseUrl": "https://ferbperdomo.com",
//!   "theme": { "storageKey": "theme", "reactToLiveOsChanges": false },
//!   "storage": { "path": "site_kv.db", "namespace": "device" }
//! }
//! ```

use app_state::ThemeStoreConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use storage::KvConfig;

use crate::error::{Result, SiteError};

/// Canonical origin of the published site
pub const DEFAULT_BASE_URL: &str = "https://ferbperdomo.com";

/// Client storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageSettings {
    /// Key-value engine settings
    #[serde(flatten)]
    pub kv: KvConfig,
    /// Prefix applied to every key the site writes
    pub namespace: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self { kv: KvConfig::default(), namespace: "device".to_string() }
    }
}

/// Top-level site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Origin used for absolute URLs, without a trailing slash
    pub base_url: String,
    /// Theme store settings
    pub theme: ThemeStoreConfig,
    /// Client storage settings
    pub storage: StorageSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme: ThemeStoreConfig::default(),
            storage: StorageSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: SiteConfig = serde_json::from_str(json)?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SiteError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the theme store settings
    pub fn theme(mut self, theme: ThemeStoreConfig) -> Self {
        self.theme = theme;
        self
    }

    /// Set the client storage settings
    pub fn storage(mut self, storage: StorageSettings) -> Self {
        self.storage = storage;
        self
    }
}
