//! Logic layer of the ferbperdomo portfolio site
//!
//! The site is bilingual (Spanish/English) and themeable (light, medium,
//! dark). This crate wires the workspace together:
//!
//! - [`config`] - Site configuration loaded from JSON
//! - [`logging`] - Tracing subscriber setup
//! - [`site`] - The [`Site`] facade handed to presentation code
//! - [`sitemap`] - Sitemap entries for both locales
//!
//! # Example
//!
//! ```rust
//! use ferbperdomo_site::{Site, SiteConfig};
//! use app_platform::FixedColorScheme;
//! use app_ui::ThemeValue;
//! use i18n::Locale;
//! use storage::MemoryStorage;
//!
//! let site = Site::new(SiteConfig::default(), MemoryStorage::new(), FixedColorScheme::UNKNOWN);
//! site.theme().initialize();
//! site.theme().change_theme(ThemeValue::Medium);
//!
//! assert_eq!(site.switch_language("/es/proyectos/byte-studio", Locale::En), "/en/projects/byte-studio");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod logging;
pub mod site;
pub mod sitemap;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use logging::init_tracing;
pub use site::Site;
pub use sitemap::{build_sitemap, ChangeFrequency, SitemapEntry};
