//! Desktop notifications when a locked entry becomes readable.
//!
//! [`use_unlock_notifier`] asks for permission once on mount (only while the
//! browser still reports `default`), then scans the loaded entries every
//! `notify_poll_secs`. Which entries were already announced lives in the
//! component, so a reload starts with a clean slate.

use chrono::Utc;
use dioxus::prelude::*;
use store::{DiaryConfig, DiaryEntry, UnlockNotice, UnlockNotifier};

use crate::platform::sleep;

pub fn use_unlock_notifier(entries: Signal<Vec<DiaryEntry>>) {
    let config = use_context::<DiaryConfig>();
    let poll = config.timers.notify_poll();
    let mut notifier = use_signal(|| UnlockNotifier::from_config(&config.timers));

    use_hook(request_permission);

    use_future(move || async move {
        loop {
            sleep(poll).await;
            if !permission_granted() {
                continue;
            }
            let due = notifier.write().due(&entries.peek(), Utc::now());
            for notice in &due {
                show(notice);
            }
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn notifications_available() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &"Notification".into()).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
fn request_permission() {
    use web_sys::{Notification, NotificationPermission};

    if notifications_available() && Notification::permission() == NotificationPermission::Default {
        if let Err(e) = Notification::request_permission() {
            tracing::warn!("notification permission request failed: {e:?}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn permission_granted() -> bool {
    use web_sys::{Notification, NotificationPermission};

    notifications_available() && Notification::permission() == NotificationPermission::Granted
}

#[cfg(target_arch = "wasm32")]
fn show(notice: &UnlockNotice) {
    use web_sys::{Notification, NotificationOptions};

    let options = NotificationOptions::new();
    options.set_body(&notice.body);
    if let Err(e) = Notification::new_with_options(&notice.title, &options) {
        tracing::warn!("failed to show notification for entry {}: {e:?}", notice.entry_id);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn request_permission() {}

#[cfg(not(target_arch = "wasm32"))]
fn permission_granted() -> bool {
    true
}

#[cfg(not(target_arch = "wasm32"))]
fn show(notice: &UnlockNotice) {
    tracing::info!("{}: {}", notice.title, notice.body);
}
