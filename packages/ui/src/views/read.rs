//! Read screen: the past entry beside a reflection form, plus the reply and
//! delete dialogs.

use dioxus::prelude::*;
use store::models::ReflectionRequest;
use store::{Outcome, ReadSession};

use crate::auth::{report_api_error, use_auth, use_client};
use crate::diary::{refresh_entries, use_diary};
use crate::theme::use_display_prefs;
use crate::views::ModalOverlay;

const REFLECTION_PROMPTS: [&str; 3] = [
    "ตอนนี้รู้สึกยังไงกับเรื่องนั้น?",
    "แก้ได้หรือยัง?",
    "มันไม่ได้แย่อย่างที่คิดใช่ไหม?",
];

/// Shows the read session of `entry_id`. Deletion is handed to `on_delete`
/// so the request outlives this component.
#[component]
pub fn ReadView(entry_id: i64, on_delete: EventHandler<i64>) -> Element {
    let client = use_client();
    let auth = use_auth();
    let mut diary = use_diary();
    let prefs = use_display_prefs();
    let mut confirm_delete = use_signal(|| false);

    let fetch_client = client.clone();
    use_future(move || {
        let client = fetch_client.clone();
        async move {
            match client.get_entry(entry_id).await {
                Ok(entry) => {
                    if let Some(session) = diary.view.write().read_mut() {
                        session.apply_fetched(entry);
                    }
                }
                Err(e) => report_api_error(auth, "fetch entry", &e),
            }
        }
    });

    let handle_submit = move |_: MouseEvent| {
        let started = diary.view.write().read_mut().and_then(|session| {
            let outcome = session.flow.begin_submit()?;
            Some((outcome, session.reflection_text.clone()))
        });
        let Some((outcome, reflection)) = started else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            let request = ReflectionRequest {
                status: outcome,
                reflection,
            };
            let reply = client.respond(entry_id, &request).await;
            match &reply {
                Ok(_) => refresh_entries(&client, diary, auth).await,
                Err(e) => report_api_error(auth, "submit reflection", e),
            }
            if let Some(session) = diary.view.write().read_mut() {
                if session.entry_id == entry_id {
                    session.flow.complete(reply);
                }
            }
        });
    };

    let Some(session) = diary.view.read().read().cloned() else {
        return rsx! {};
    };
    let Some(entry) = session.entry.clone() else {
        return rsx! {
            div { class: "read-view container", div { class: "loading-state", "Loading..." } }
        };
    };
    let blur_class = if prefs.is_blurred() { "privacy-blur" } else { "" };
    let selected = session.flow.selected();
    let submitting = session.flow.is_submitting();

    rsx! {
        div {
            class: "read-view container",
            div {
                class: "read-header-actions",
                button { class: "btn-back", onclick: move |_| diary.back(), "← Back" }
                button { class: "btn-delete", onclick: move |_| confirm_delete.set(true), "🗑️ ลบ" }
            }

            div {
                class: "read-layout",
                div {
                    class: "glass-panel read-card past-card",
                    div {
                        class: "read-card-header",
                        span { class: "read-label", "📜 Your Past Self" }
                        span { class: "read-date", "{entry.created_label()}" }
                        if let Some(mood) = entry.mood() {
                            span { class: "read-mood", "{mood}" }
                        }
                    }
                    h2 { class: "read-title", "{entry.title}" }
                    div { class: "read-content {blur_class}", "{entry.content}" }
                }

                div {
                    class: "glass-panel read-card reflection-card",
                    div {
                        class: "read-card-header",
                        span { class: "read-label", "💭 Reflection" }
                    }
                    div {
                        class: "reflection-prompts",
                        for prompt in REFLECTION_PROMPTS {
                            p { key: "{prompt}", "• {prompt}" }
                        }
                    }
                    textarea {
                        class: "reflection-input",
                        placeholder: "เขียนสิ่งที่อยากบอกตัวเองในอดีต...",
                        value: session.reflection_text.clone(),
                        oninput: move |evt: FormEvent| {
                            if let Some(session) = diary.view.write().read_mut() {
                                session.reflection_text = evt.value();
                            }
                        },
                    }

                    div {
                        class: "response-section",
                        p { class: "response-label", "เลือกสถานะของคุณ:" }
                        div {
                            class: "response-options",
                            for outcome in Outcome::ALL {
                                OutcomeOption {
                                    key: "{outcome.icon()}",
                                    outcome,
                                    selected: selected == Some(outcome),
                                    on_select: move |outcome| {
                                        if let Some(session) = diary.view.write().read_mut() {
                                            session.flow.select(outcome);
                                        }
                                    },
                                }
                            }
                        }
                        button {
                            class: "btn-primary submit-btn",
                            disabled: !session.flow.can_submit(),
                            onclick: handle_submit,
                            if submitting { "กำลังประมวลผล..." } else { "ส่งคำตอบ" }
                        }
                    }
                }
            }
        }

        if session.flow.result().is_some() {
            ReflectionResult { session: session.clone() }
        }

        if confirm_delete() {
            ModalOverlay {
                on_close: move |_| confirm_delete.set(false),
                div { class: "modal-icon", "🗑️" }
                h3 { "ลบรายการนี้?" }
                p { "คุณแน่ใจหรือไม่ที่จะลบ \"{entry.title}\"?" }
                p { class: "modal-warning", "การกระทำนี้ไม่สามารถเรียกคืนได้" }
                div {
                    class: "modal-buttons",
                    button { class: "btn-secondary", onclick: move |_| confirm_delete.set(false), "ยกเลิก" }
                    button {
                        class: "btn-danger",
                        onclick: move |_| {
                            confirm_delete.set(false);
                            on_delete.call(entry_id);
                        },
                        "ลบเลย"
                    }
                }
            }
        }
    }
}

#[component]
fn OutcomeOption(outcome: Outcome, selected: bool, on_select: EventHandler<Outcome>) -> Element {
    rsx! {
        label {
            class: if selected { "response-option selected" } else { "response-option" },
            input {
                r#type: "radio",
                name: "status",
                checked: selected,
                onchange: move |_| on_select.call(outcome),
            }
            span { class: "response-icon", "{outcome.icon()}" }
            div {
                span { class: "response-title", "{outcome.title()}" }
                span { class: "response-desc", "{outcome.description()}" }
            }
        }
    }
}

/// The assistant's reply, with the hotline block for `need_help` and the
/// re-check note when the entry will come back.
#[component]
fn ReflectionResult(session: ReadSession) -> Element {
    let mut diary = use_diary();
    let Some((_, message)) = session.flow.result() else {
        return rsx! {};
    };
    let message = message.to_string();

    rsx! {
        ModalOverlay {
            class: "ai-result-modal",
            on_close: move |_| diary.view.write().finish_reflection(),
            div { class: "modal-icon", "🤖" }
            h3 { "จากใจ AI" }
            div { class: "ai-response-text", "{message}" }

            if session.flow.shows_crisis_resources() {
                div {
                    class: "help-resources",
                    div {
                        class: "help-item",
                        span { "📞" }
                        div {
                            strong { "สายด่วนสุขภาพจิต" }
                            p { "1323 (24 ชั่วโมง)" }
                        }
                    }
                    div {
                        class: "help-item",
                        span { "💬" }
                        div {
                            strong { "สายด่วนป้องกันการฆ่าตัวตาย" }
                            p { "1388" }
                        }
                    }
                }
            }

            if let Some(hours) = session.flow.recheck_hours() {
                p { class: "timer-note", "⏰ เราจะกลับมาเช็คอีกครั้งใน {hours} ชั่วโมง" }
            }

            button {
                class: "btn-primary",
                onclick: move |_| diary.view.write().finish_reflection(),
                "ขอบคุณนะ 💛"
            }
        }
    }
}
