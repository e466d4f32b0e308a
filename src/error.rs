//! Site-level errors

use storage::KvError;
use thiserror::Error;

/// Errors raised while setting the site up
///
/// Runtime operations (theme changes, route translation) never fail; only
/// loading configuration and opening storage can.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Configuration file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        /// Path that was read
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Configuration was not valid JSON for [`crate::SiteConfig`]
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Client storage could not be opened
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),
}

/// Result type for site setup
pub type Result<T> = std::result::Result<T, SiteError>;
