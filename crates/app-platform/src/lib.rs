//! Platform integration for the portfolio site
//!
//! This crate answers the one question the site asks of the operating
//! system: does the user prefer a dark colour scheme?

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color_scheme;

pub use color_scheme::{ColorSchemeProbe, FixedColorScheme, SystemColorScheme};
