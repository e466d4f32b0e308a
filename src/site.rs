//! Site facade
//!
//! [`Site`] owns the theme store and exposes the route translator, which is
//! the whole surface presentation code uses. Theme and locale logic are
//! independent; the facade only puts them behind one handle.

use app_platform::{ColorSchemeProbe, SystemColorScheme};
use app_state::ThemeStore;
use app_ui::language_switch::{self, LanguageOption};
use chrono::{DateTime, Utc};
use i18n::{negotiate_locale, Locale, RouteMapping};
use storage::{ClientStorage, KvStore};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::sitemap::{build_sitemap, SitemapEntry};

/// Handle to the site's shared logic
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    theme: ThemeStore,
    routes: &'static RouteMapping,
}

impl Site {
    /// Create a site over explicit storage and colour-scheme probe
    pub fn new<S, P>(config: SiteConfig, storage: S, probe: P) -> Self
    where
        S: ClientStorage + 'static,
        P: ColorSchemeProbe + 'static,
    {
        let theme = ThemeStore::new(storage, probe, config.theme.clone());
        Self { config, theme, routes: RouteMapping::site() }
    }

    /// Create a site backed by on-disk storage and the system colour scheme
    pub fn open(config: SiteConfig) -> Result<Self> {
        let kv = KvStore::new(config.storage.kv.clone())?.with_namespace(config.storage.namespace.clone());
        tracing::info!(path = %config.storage.kv.path, "site storage opened");
        Ok(Self::new(config, kv, SystemColorScheme))
    }

    /// Site configuration
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The theme store shared by every themed component
    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    /// Section dictionary used for route translation
    pub fn routes(&self) -> &RouteMapping {
        self.routes
    }

    /// Path of the current page in `target`
    pub fn switch_language(&self, path: &str, target: Locale) -> String {
        self.routes.translate_route(path, target)
    }

    /// Name of section `name` in `locale`
    pub fn localized_section<'a>(&'a self, name: &'a str, locale: Locale) -> &'a str {
        self.routes.localized_route_name(name, locale)
    }

    /// Language switcher buttons for `path`, styled for the active theme
    pub fn language_options(&self, path: &str) -> Vec<LanguageOption> {
        language_switch::language_options(path, self.theme.current_theme())
    }

    /// Where a request for `/` should go, given the client's language tags
    pub fn root_redirect<T: AsRef<str>>(&self, accepted_languages: &[T]) -> String {
        format!("/{}", negotiate_locale(accepted_languages))
    }

    /// Absolute URL for a site path
    pub fn absolute_url(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            return self.config.base_url.clone();
        }
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    /// Sitemap for the given project slugs
    pub fn sitemap<T: AsRef<str>>(&self, project_slugs: &[T], last_modified: DateTime<Utc>) -> Vec<SitemapEntry> {
        build_sitemap(&self.config.base_url, project_slugs, last_modified)
    }
}
