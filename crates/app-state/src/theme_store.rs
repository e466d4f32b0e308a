//! Theme state store
//!
//! [`ThemeStore`] holds the active [`ThemeValue`] for a page session. It is
//! a cheaply clonable handle: every component that needs theme classes gets
//! a clone instead of reaching for global state.
//!
//! Lifecycle:
//!
//! 1. Before [`ThemeStore::initialize`] the store reports the dark theme and
//!    the fixed [`FALLBACK`] attributes, so server-rendered markup and the
//!    first client render agree.
//! 2. `initialize` adopts the persisted choice if it is valid, otherwise the
//!    operating system's colour-scheme preference, otherwise Light. Nothing is
//!    written back.
//! 3. [`ThemeStore::change_theme`] switches theme and persists the choice.
//!    A storage failure is logged and otherwise ignored; the in-memory theme
//!    still changes.
//!
//! # Example
//!
//! ```rust
//! use app_platform::FixedColorScheme;
//! use app_state::{ThemeStore, ThemeStoreConfig};
//! use app_ui::ThemeValue;
//! use storage::MemoryStorage;
//!
//! let store = ThemeStore::new(MemoryStorage::new(), FixedColorScheme::DARK, ThemeStoreConfig::default());
//! assert_eq!(store.background_attribute(), "bg-black");
//!
//! store.initialize();
//! assert_eq!(store.current_theme(), ThemeValue::Dark);
//!
//! store.change_theme(ThemeValue::Medium);
//! assert_eq!(store.background_attribute(), "bg-theme-medium");
//! ```

use app_platform::ColorSchemeProbe;
use app_ui::theme::{self, ThemeAttributes, ThemeValue, FALLBACK};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storage::ClientStorage;
use tokio::sync::watch;

/// Storage key the theme ordinal is written under
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Theme store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeStoreConfig {
    /// Client storage key for the persisted theme
    pub storage_key: String,
    /// Follow live OS colour-scheme changes, overriding an explicit choice
    pub react_to_live_os_changes: bool,
}

impl Default for ThemeStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            react_to_live_os_changes: false,
        }
    }
}

impl ThemeStoreConfig {
    /// Set the storage key
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Enable or disable following live OS colour-scheme changes
    pub fn react_to_live_os_changes(mut self, enabled: bool) -> Self {
        self.react_to_live_os_changes = enabled;
        self
    }
}

/// Where the current theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeSource {
    /// Not resolved yet; pre-hydration default
    Unresolved,
    /// Read from client storage
    Persisted,
    /// Derived from the OS colour-scheme preference
    System,
    /// No stored value and no OS signal
    Default,
    /// Chosen by the user during this session
    User,
}

#[derive(Debug)]
struct ThemeState {
    theme: ThemeValue,
    source: ThemeSource,
    ready: bool,
}

struct Inner {
    state: RwLock<ThemeState>,
    storage: Box<dyn ClientStorage>,
    probe: Box<dyn ColorSchemeProbe>,
    config: ThemeStoreConfig,
    theme_tx: watch::Sender<ThemeValue>,
}

/// Shared handle to the active theme
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &*self.inner.state.read())
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Create a store over `storage` and `probe`; call [`initialize`](Self::initialize) once mounted
    pub fn new<S, P>(storage: S, probe: P, config: ThemeStoreConfig) -> Self
    where
        S: ClientStorage + 'static,
        P: ColorSchemeProbe + 'static,
    {
        let initial = ThemeValue::default();
        let (theme_tx, _) = watch::channel(initial);

        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(ThemeState {
                    theme: initial,
                    source: ThemeSource::Unresolved,
                    ready: false,
                }),
                storage: Box::new(storage),
                probe: Box::new(probe),
                config,
                theme_tx,
            }),
        }
    }

    /// Store configuration
    pub fn config(&self) -> &ThemeStoreConfig {
        &self.inner.config
    }

    /// Resolve the session's theme and mark the store ready
    ///
    /// Persisted choice first, then the OS preference, then Light. Does not
    /// write to storage.
    pub fn initialize(&self) -> ThemeValue {
        let (theme, source) = match self.read_persisted() {
            Some(theme) => (theme, ThemeSource::Persisted),
            None => match self.inner.probe.prefers_dark() {
                Some(prefers_dark) => (ThemeValue::from_prefers_dark(prefers_dark), ThemeSource::System),
                None => (ThemeValue::Light, ThemeSource::Default),
            },
        };

        {
            let mut state = self.inner.state.write();
            state.theme = theme;
            state.source = source;
            state.ready = true;
        }
        tracing::debug!(%theme, ?source, "theme initialized");

        self.inner.theme_tx.send_replace(theme);
        theme
    }

    fn read_persisted(&self) -> Option<ThemeValue> {
        let key = &self.inner.config.storage_key;
        match self.inner.storage.get_item(key) {
            Ok(Some(raw)) => {
                let theme = ThemeValue::from_ordinal_str(&raw);
                if theme.is_none() {
                    tracing::debug!(key = %key, value = %raw, "ignoring invalid persisted theme");
                }
                theme
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to read persisted theme: {}", e);
                None
            }
        }
    }

    /// Switch to `theme` and persist it
    pub fn change_theme(&self, theme: ThemeValue) {
        self.set_theme(theme, ThemeSource::User);

        let key = &self.inner.config.storage_key;
        if let Err(e) = self.inner.storage.set_item(key, &theme.to_ordinal_string()) {
            tracing::warn!("Failed to persist theme {}: {}", theme, e);
        }
        tracing::info!(%theme, "theme changed");
    }

    fn set_theme(&self, theme: ThemeValue, source: ThemeSource) {
        {
            let mut state = self.inner.state.write();
            state.theme = theme;
            state.source = source;
        }
        self.inner.theme_tx.send_replace(theme);
    }

    /// Apply a live OS colour-scheme change
    ///
    /// Only honoured when [`ThemeStoreConfig::react_to_live_os_changes`] is
    /// set and the store is initialized; overrides any explicit choice for the
    /// session without persisting. Returns whether the theme was updated.
    pub fn on_system_preference_changed(&self, prefers_dark: bool) -> bool {
        if !self.inner.config.react_to_live_os_changes || !self.is_ready() {
            return false;
        }

        let theme = ThemeValue::from_prefers_dark(prefers_dark);
        tracing::debug!(%theme, "following system colour scheme");
        self.set_theme(theme, ThemeSource::System);
        true
    }

    /// Active theme; Dark until initialized
    pub fn current_theme(&self) -> ThemeValue {
        self.inner.state.read().theme
    }

    /// Where the active theme came from
    pub fn source(&self) -> ThemeSource {
        self.inner.state.read().source
    }

    /// Whether [`initialize`](Self::initialize) has run
    pub fn is_ready(&self) -> bool {
        self.inner.state.read().ready
    }

    /// Check if the active theme is Dark
    pub fn is_dark(&self) -> bool {
        self.current_theme().is_dark()
    }

    /// Static attributes of `theme`
    pub fn attributes_for(theme: ThemeValue) -> &'static ThemeAttributes {
        theme::attributes_for(theme)
    }

    /// Attributes to render with: the fallback set until initialized
    pub fn attributes(&self) -> &'static ThemeAttributes {
        let state = self.inner.state.read();
        if state.ready {
            theme::attributes_for(state.theme)
        } else {
            &FALLBACK
        }
    }

    /// Background class
    pub fn background_attribute(&self) -> &'static str {
        self.attributes().background
    }

    /// Body text class
    pub fn text_attribute(&self) -> &'static str {
        self.attributes().text
    }

    /// Primary text class
    pub fn primary_attribute(&self) -> &'static str {
        self.attributes().primary
    }

    /// Secondary text class
    pub fn secondary_attribute(&self) -> &'static str {
        self.attributes().secondary
    }

    /// Accent class
    pub fn accent_attribute(&self) -> &'static str {
        self.attributes().accent
    }

    /// Subscribe to theme changes
    pub fn subscribe(&self) -> watch::Receiver<ThemeValue> {
        self.inner.theme_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_platform::FixedColorScheme;
    use mockall::mock;
    use mockall::predicate::eq;
    use storage::{DisabledStorage, KvError, MemoryStorage};

    mock! {
        pub Storage {}

        impl ClientStorage for Storage {
            fn get_item(&self, key: &str) -> storage::Result<Option<String>>;
            fn set_item(&self, key: &str, value: &str) -> storage::Result<()>;
            fn remove_item(&self, key: &str) -> storage::Result<()>;
        }
    }

    mock! {
        pub Probe {}

        impl ColorSchemeProbe for Probe {
            fn prefers_dark(&self) -> Option<bool>;
        }
    }

    fn store_with(storage: MemoryStorage, probe: FixedColorScheme) -> ThemeStore {
        ThemeStore::new(storage, probe, ThemeStoreConfig::default())
    }

    // ==========================================================================
    // Initialization Tests
    // ==========================================================================

    #[test]
    fn test_before_initialize_uses_fallback() {
        let store = store_with(MemoryStorage::new(), FixedColorScheme::LIGHT);

        assert!(!store.is_ready());
        assert_eq!(store.source(), ThemeSource::Unresolved);
        assert_eq!(store.current_theme(), ThemeValue::Dark);
        assert!(store.is_dark());
        assert_eq!(store.background_attribute(), "bg-black");
        assert_eq!(store.text_attribute(), "text-white");
        assert_eq!(store.primary_attribute(), "text-white");
        assert_eq!(store.secondary_attribute(), "text-gray-300");
        assert_eq!(store.accent_attribute(), "bg-white");
    }

    #[test]
    fn test_initialize_prefers_persisted_value() {
        let storage = MemoryStorage::new();
        storage.set_item("theme", "1").unwrap();
        let store = store_with(storage, FixedColorScheme::DARK);

        assert_eq!(store.initialize(), ThemeValue::Medium);
        assert_eq!(store.source(), ThemeSource::Persisted);
        assert_eq!(store.background_attribute(), "bg-theme-medium");
    }

    #[test]
    fn test_initialize_from_system_dark() {
        let store = store_with(MemoryStorage::new(), FixedColorScheme::DARK);
        assert_eq!(store.initialize(), ThemeValue::Dark);
        assert_eq!(store.source(), ThemeSource::System);
        assert_eq!(store.background_attribute(), "bg-theme-dark");
    }

    #[test]
    fn test_initialize_from_system_light() {
        let store = store_with(MemoryStorage::new(), FixedColorScheme::LIGHT);
        assert_eq!(store.initialize(), ThemeValue::Light);
        assert_eq!(store.source(), ThemeSource::System);
    }

    #[test]
    fn test_initialize_without_any_signal() {
        let store = store_with(MemoryStorage::new(), FixedColorScheme::UNKNOWN);
        assert_eq!(store.initialize(), ThemeValue::Light);
        assert_eq!(store.source(), ThemeSource::Default);
        assert!(!store.is_dark());
    }

    #[test]
    fn test_initialize_ignores_invalid_persisted_value() {
        for raw in ["3", "dark", "", "-1"] {
            let storage = MemoryStorage::new();
            storage.set_item("theme", raw).unwrap();
            let store = store_with(storage, FixedColorScheme::DARK);

            assert_eq!(store.initialize(), ThemeValue::Dark, "value {:?}", raw);
            assert_eq!(store.source(), ThemeSource::System);
        }
    }

    #[test]
    fn test_initialize_does_not_persist() {
        let storage = MemoryStorage::new();
        let store = store_with(storage.clone(), FixedColorScheme::DARK);

        store.initialize();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_initialize_with_unreadable_storage() {
        let store = ThemeStore::new(DisabledStorage, FixedColorScheme::DARK, ThemeStoreConfig::default());
        assert_eq!(store.initialize(), ThemeValue::Dark);
        assert!(store.is_ready());
    }

    #[test]
    fn test_initialize_reads_configured_key() {
        let mut storage = MockStorage::new();
        storage
            .expect_get_item()
            .with(eq("site-theme"))
            .times(1)
            .returning(|_| Ok(Some("0".to_string())));
        storage.expect_set_item().never();

        let mut probe = MockProbe::new();
        probe.expect_prefers_dark().never();

        let store = ThemeStore::new(
            storage,
            probe,
            ThemeStoreConfig::default().storage_key("site-theme"),
        );
        assert_eq!(store.initialize(), ThemeValue::Light);
    }

    // ==========================================================================
    // Change Tests
    // ==========================================================================

    #[test]
    fn test_change_theme_persists_ordinal() {
        let storage = MemoryStorage::new();
        let store = store_with(storage.clone(), FixedColorScheme::UNKNOWN);
        store.initialize();

        store.change_theme(ThemeValue::Medium);

        assert_eq!(store.current_theme(), ThemeValue::Medium);
        assert_eq!(store.source(), ThemeSource::User);
        assert_eq!(storage.get_item("theme").unwrap(), Some("1".to_string()));
    }

    #[test]
    fn test_every_transition_is_allowed() {
        let store = store_with(MemoryStorage::new(), FixedColorScheme::UNKNOWN);
        store.initialize();

        for from in ThemeValue::ALL {
            for to in ThemeValue::ALL {
                store.change_theme(from);
                store.change_theme(to);
                assert_eq!(store.current_theme(), to);
                assert_eq!(store.is_dark(), to == ThemeValue::Dark);
                assert_eq!(store.attributes(), to.attributes());
            }
        }
    }

    #[test]
    fn test_change_survives_reload() {
        for theme in ThemeValue::ALL {
            let storage = MemoryStorage::new();
            let store = store_with(storage.clone(), FixedColorScheme::DARK);
            store.initialize();
            store.change_theme(theme);

            let reloaded = store_with(storage, FixedColorScheme::DARK);
            assert_eq!(reloaded.initialize(), theme);
            assert_eq!(reloaded.source(), ThemeSource::Persisted);
        }
    }

    #[test]
    fn test_change_with_failing_storage_still_updates() {
        let mut storage = MockStorage::new();
        storage
            .expect_set_item()
            .with(eq("theme"), eq("2"))
            .times(1)
            .returning(|_, _| Err(KvError::Unavailable));
        storage.expect_get_item().returning(|_| Err(KvError::Unavailable));

        let store = ThemeStore::new(storage, FixedColorScheme::LIGHT, ThemeStoreConfig::default());
        store.initialize();
        store.change_theme(ThemeValue::Dark);

        assert_eq!(store.current_theme(), ThemeValue::Dark);
        assert_eq!(store.background_attribute(), "bg-theme-dark");
    }

    #[test]
    fn test_change_before_initialize_keeps_fallback() {
        let storage = MemoryStorage::new();
        let store = store_with(storage.clone(), FixedColorScheme::UNKNOWN);

        store.change_theme(ThemeValue::Light);
        assert_eq!(store.background_attribute(), "bg-black");

        assert_eq!(store.initialize(), ThemeValue::Light);
        assert_eq!(store.background_attribute(), "bg-theme-light");
    }

    #[test]
    fn test_clones_share_state() {
        let store = store_with(MemoryStorage::new(), FixedColorScheme::UNKNOWN);
        let navbar = store.clone();
        store.initialize();

        store.change_theme(ThemeValue::Medium);
        assert_eq!(navbar.current_theme(), ThemeValue::Medium);
        assert!(navbar.is_ready());
    }

    // ==========================================================================
    // Live OS Preference Tests
    // ==========================================================================

    #[test]
    fn test_live_os_changes_ignored_by_default() {
        let store = store_with(MemoryStorage::new(), FixedColorScheme::LIGHT);
        store.initialize();
        store.change_theme(ThemeValue::Medium);

        assert!(!store.on_system_preference_changed(true));
        assert_eq!(store.current_theme(), ThemeValue::Medium);
    }

    #[test]
    fn test_live_os_changes_followed_when_enabled() {
        let storage = MemoryStorage::new();
        let store = ThemeStore::new(
            storage.clone(),
            FixedColorScheme::LIGHT,
            ThemeStoreConfig::default().react_to_live_os_changes(true),
        );
        store.initialize();
        store.change_theme(ThemeValue::Medium);

        assert!(store.on_system_preference_changed(true));
        assert_eq!(store.current_theme(), ThemeValue::Dark);
        assert_eq!(store.source(), ThemeSource::System);
        // the explicit choice stays in storage
        assert_eq!(storage.get_item("theme").unwrap(), Some("1".to_string()));

        assert!(store.on_system_preference_changed(false));
        assert_eq!(store.current_theme(), ThemeValue::Light);
    }

    #[test]
    fn test_live_os_changes_wait_for_initialize() {
        let store = ThemeStore::new(
            MemoryStorage::new(),
            FixedColorScheme::LIGHT,
            ThemeStoreConfig::default().react_to_live_os_changes(true),
        );
        assert!(!store.on_system_preference_changed(false));
        assert_eq!(store.background_attribute(), "bg-black");
    }

    // ==========================================================================
    // Subscription Tests
    // ==========================================================================

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = store_with(MemoryStorage::new(), FixedColorScheme::UNKNOWN);
        let mut rx = store.subscribe();
        assert_eq!(*rx.borrow(), ThemeValue::Dark);

        store.initialize();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), ThemeValue::Light);

        store.change_theme(ThemeValue::Medium);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), ThemeValue::Medium);
    }

    // ==========================================================================
    // Configuration Tests
    // ==========================================================================

    #[test]
    fn test_config_defaults() {
        let config = ThemeStoreConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert!(!config.react_to_live_os_changes);
    }

    #[test]
    fn test_config_deserialize() {
        let config: ThemeStoreConfig =
            serde_json::from_str(r#"{"reactToLiveOsChanges": true}"#).unwrap();
        assert_eq!(config.storage_key, "theme");
        assert!(config.react_to_live_os_changes);
    }
}
