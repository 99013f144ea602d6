use chrono::{DateTime, FixedOffset, Utc};
use dioxus::prelude::*;
use store::{Countdown, DiaryConfig, DiaryEntry};

use crate::platform::sleep;

/// Live `HH:MM:SS` countdown to `unlock_at`, switching to `Ready!` at zero.
/// The ticking task belongs to this component, stops once ready and restarts
/// when `unlock_at` changes.
#[component]
pub fn CountdownLabel(unlock_at: DateTime<FixedOffset>) -> Element {
    let tick = use_context::<DiaryConfig>().timers.countdown_tick();
    let mut now = use_signal(Utc::now);

    let _ticker = use_resource(use_reactive!(|unlock_at| async move {
        now.set(Utc::now());
        while !Countdown::between(unlock_at, Utc::now()).is_ready() {
            sleep(tick).await;
            now.set(Utc::now());
        }
    }));

    let remaining = Countdown::between(unlock_at, now());
    rsx! {
        div { class: "countdown", "{remaining}" }
    }
}

/// One card in the dashboard grid. Locked entries show only their title and
/// the countdown.
#[component]
pub fn EntryCard(entry: DiaryEntry, blurred: bool, on_open: EventHandler<DiaryEntry>) -> Element {
    let blur_class = if blurred { "privacy-blur" } else { "" };
    let card = entry.clone();

    rsx! {
        div {
            class: if entry.is_locked { "entry-card locked-card" } else { "entry-card" },
            onclick: move |_| on_open.call(card.clone()),
            if entry.is_locked {
                div {
                    class: "locked-card-content",
                    div { class: "locked-title {blur_class}", "{entry.title}" }
                    div {
                        class: "locked-center",
                        span { class: "locked-icon", "🔒" }
                        span { class: "locked-label", "LOCKED" }
                    }
                    CountdownLabel { unlock_at: entry.unlock_at }
                }
            } else {
                div {
                    class: "card-header",
                    span { class: "date", "{entry.created_label()}" }
                    if let Some(mood) = entry.mood() {
                        span { class: "card-mood", "{mood}" }
                    }
                }
                h3 { class: "{blur_class}", "{entry.title}" }
                p { class: "preview-text {blur_class}", "{entry.preview}" }
            }
        }
    }
}
