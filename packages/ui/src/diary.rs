//! Shared diary state: which screen is showing and the loaded entry list.
//!
//! The root component provides a [`DiaryState`]; screens read it through
//! [`use_diary`]. The entry list is never patched locally: after every mutation
//! the screen calls [`refresh_entries`] and shows what the server returns.

use api::DiaryClient;
use dioxus::prelude::*;
use store::{DiaryEntry, View, ViewState};

use crate::auth::{prompt_login, report_api_error, AuthState};

#[derive(Clone, Copy, PartialEq)]
pub struct DiaryState {
    pub view: Signal<ViewState>,
    pub entries: Signal<Vec<DiaryEntry>>,
}

impl DiaryState {
    /// Switch screens, opening the login modal when the target needs an account.
    pub fn open(mut self, auth: Signal<AuthState>, target: View) {
        let authenticated = auth.peek().authenticated;
        if self.view.write().open(target, authenticated).is_err() {
            prompt_login(auth);
        }
    }

    pub fn open_entry(mut self, entry_id: i64) {
        self.view.write().open_entry(entry_id);
    }

    pub fn back(mut self) {
        self.view.write().back();
    }

    /// Drop the entry list and leave any screen that needs an account.
    pub fn sign_out(mut self) {
        self.entries.set(Vec::new());
        self.view.write().signed_out();
    }
}

pub fn use_diary() -> DiaryState {
    use_context::<DiaryState>()
}

/// Create the diary state and provide it to every descendant.
pub fn use_diary_provider() -> DiaryState {
    let view = use_signal(ViewState::default);
    let entries = use_signal(Vec::new);
    use_context_provider(|| DiaryState { view, entries })
}

/// Replace the entry list with the server's. Signed-out sessions see an empty
/// list.
pub async fn refresh_entries(client: &DiaryClient, mut diary: DiaryState, auth: Signal<AuthState>) {
    if !client.is_authenticated() {
        diary.entries.set(Vec::new());
        return;
    }
    match client.list_entries().await {
        Ok(entries) => diary.entries.set(entries),
        Err(e) => report_api_error(auth, "fetch entries", &e),
    }
}
