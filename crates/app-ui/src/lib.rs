//! Presentation logic for the portfolio site
//!
//! This crate holds the pieces of the UI that are decisions rather than
//! markup: which CSS classes each theme uses, how the theme slider maps
//! between pixels and themes, and what the language switcher shows.
//!
//! Three themes are supported:
//! - [`theme::ThemeValue::Light`]
//! - [`theme::ThemeValue::Medium`]
//! - [`theme::ThemeValue::Dark`]
//!
//! # Modules
//!
//! - [`theme`] - Theme values and their display attributes
//! - [`toggle`] - Theme slider geometry
//! - [`language_switch`] - Language switcher view-model
//!
//! # Example
//!
//! ```rust
//! use app_ui::theme::ThemeValue;
//! use app_ui::toggle::{release, thumb_offset};
//!
//! let theme = ThemeValue::Light;
//! assert_eq!(thumb_offset(theme), 0.0);
//! assert_eq!(release(theme, 30.0), Some(ThemeValue::Dark));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod language_switch;
pub mod theme;
pub mod toggle;

// Re-export commonly used types
pub use theme::{attributes_for, ThemeAttributes, ThemeValue, UnknownTheme, FALLBACK};

pub use toggle::{icon_opacity, release, theme_at_offset, thumb_offset, IconOpacity};

pub use language_switch::{language_options, LanguageOption};
