//! Application state management for the portfolio site
//!
//! This crate provides the theme store: the single source of truth for the
//! active theme, shared by every themed component, persisted to client
//! storage, and observable through a watch channel.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod theme_store;

pub use theme_store::{ThemeSource, ThemeStore, ThemeStoreConfig, DEFAULT_STORAGE_KEY};
