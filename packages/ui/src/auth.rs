//! Authentication context and hooks for the UI.

use api::{ApiError, DiaryClient};
use dioxus::prelude::*;
use store::{DiaryConfig, Session, SharedStore, UserProfile};

use crate::platform::reload_page;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    /// A token is stored.
    pub authenticated: bool,
    /// Loaded from `GET /profile` once signed in.
    pub profile: Option<UserProfile>,
    /// Whether the login modal is open.
    pub show_login: bool,
}

impl AuthState {
    pub fn signed_in(profile: UserProfile) -> Self {
        Self {
            authenticated: true,
            profile: Some(profile),
            show_login: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The API client provided by [`AuthProvider`].
pub fn use_client() -> DiaryClient {
    use_context::<DiaryClient>()
}

/// Open the login modal.
pub fn prompt_login(mut auth: Signal<AuthState>) {
    auth.write().show_login = true;
}

/// Log a failed call. A 401 means the token was rejected: the whole session
/// is reset.
pub fn report_api_error(auth: Signal<AuthState>, context: &str, err: &ApiError) {
    tracing::error!("Failed to {context}: {err}");
    if err.is_unauthorized() {
        reset_session(auth);
    }
}

/// Drop all signed-in state. In the browser this reloads the page so nothing
/// from the previous session survives.
pub fn reset_session(mut auth: Signal<AuthState>) {
    if !reload_page() {
        auth.set(AuthState {
            show_login: true,
            ..AuthState::default()
        });
    }
}

/// Provider component that owns the API client and authentication state.
/// Expects a [`DiaryConfig`] and a [`SharedStore`] in context.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context::<DiaryConfig>();
    let shared = use_context::<SharedStore>();
    let client = use_context_provider(|| {
        DiaryClient::new(&config.api.base_url, Session::from_shared(shared.clone()))
    });

    let signed_in = client.is_authenticated();
    let mut auth_state = use_signal(|| AuthState {
        authenticated: signed_in,
        ..AuthState::default()
    });
    use_context_provider(|| auth_state);

    let authenticated = use_memo(move || auth_state.read().authenticated);

    // Load the profile whenever the user signs in.
    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            if !authenticated() {
                return;
            }
            match client.profile().await {
                Ok(profile) => auth_state.write().profile = Some(profile),
                Err(e) => report_api_error(auth_state, "load profile", &e),
            }
        }
    });

    rsx! {
        {children}
    }
}
