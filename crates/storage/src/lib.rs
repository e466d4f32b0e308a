//! Storage layer for the portfolio site
//!
//! This crate provides durable client-side key-value storage: the
//! [`ClientStorage`] seam consumed by the theme store, a sled-backed
//! [`KvStore`], and an in-memory backend for tests and server rendering.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod kv;

pub use client::{ClientStorage, DisabledStorage, MemoryStorage};
pub use kv::{KvConfig, KvError, KvStore, Result};
