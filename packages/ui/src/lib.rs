//! This crate contains all shared UI for the diary: context providers, hooks,
//! dialogs and the five screens.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{platform_store, reload_page, sleep};

pub mod views;

pub const DIARY_CSS: Asset = asset!("/assets/diary.css");

mod auth;
pub use auth::{
    prompt_login, report_api_error, reset_session, use_auth, use_client, AuthProvider, AuthState,
};

mod diary;
pub use diary::{refresh_entries, use_diary, use_diary_provider, DiaryState};

mod theme;
pub use theme::{apply_theme, use_display_prefs, use_display_prefs_provider, DisplayPrefs};

mod entry_card;
pub use entry_card::{CountdownLabel, EntryCard};

mod notifications;
pub use notifications::use_unlock_notifier;

pub mod speech;

mod login_modal;
pub use login_modal::{LoginForm, LoginModal, RegisterForm};

mod profile_settings;
pub use profile_settings::{LogoutModal, ProfileSettings};

mod sidebar;
pub use sidebar::Sidebar;
