//! Platform glue shared by every screen.
//!
//! - **Web** (WASM + `web` feature): persistence in `window.localStorage` via
//!   [`store::LocalStorage`], timers from `gloo-timers`, session resets reload
//!   the page.
//! - **Native**: an in-memory [`store::MemoryStore`], `tokio` timers, and a
//!   session reset only clears the in-app auth state.

use std::sync::Arc;
use std::time::Duration;

use store::SharedStore;

/// Create the platform-appropriate key/value store.
pub fn platform_store() -> SharedStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(store::MemoryStore::new())
    }
}

pub async fn sleep(period: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(period).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(period).await;
}

/// Reload the page. Returns `false` where there is no page to reload.
pub fn reload_page() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.location().reload().is_ok();
        }
        false
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use store::KeyValueStore;

    #[test]
    fn test_native_store_starts_empty_and_persists() {
        let store = platform_store();
        assert_eq!(store.get("token"), None);
        store.set("theme", "light");
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert!(!reload_page());
    }
}
