//! Key/value persistence for client-side flags.
//!
//! The browser build keeps the session token and display preferences in
//! `localStorage` ([`crate::LocalStorage`]); native builds and tests use
//! [`crate::MemoryStore`]. Both sit behind [`KeyValueStore`] so [`crate::Session`]
//! and [`crate::Preferences`] do not care which one they get.

use std::sync::Arc;

/// Synchronous string store. Failures are swallowed: a store that cannot be
/// written behaves like an empty one.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Shared handle used by everything that persists client state.
pub type SharedStore = Arc<dyn KeyValueStore>;
