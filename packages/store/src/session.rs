//! Persisted session token.
//!
//! Written by a successful login, read by the API client for every
//! authenticated request, cleared by logout or by a 401 from the server.

use std::fmt;
use std::sync::Arc;

use crate::kv::{KeyValueStore, SharedStore};

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "token";

#[derive(Clone)]
pub struct Session {
    store: SharedStore,
}

impl Session {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self::from_shared(Arc::new(store))
    }

    pub fn from_shared(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn store_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the token itself.
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
