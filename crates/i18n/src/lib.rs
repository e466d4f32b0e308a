//! Internationalization for the portfolio site
//!
//! The site is published in Spanish and English. This crate provides the
//! [`Locale`] type, language negotiation, and translation of route paths
//! between the two locales (`/es/proyectos/x` ⇄ `/en/projects/x`).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod locale;
pub mod routes;

pub use locale::{negotiate_locale, Locale, LocaleError};
pub use routes::{localized_route_name, translate_route, PathComponents, RouteMapping};
