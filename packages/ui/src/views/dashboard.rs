use std::collections::HashMap;

use dioxus::prelude::*;
use store::forms::validate_answer;
use store::{AiAlert, AiQuestion, DiaryEntry, View};

use crate::auth::{report_api_error, use_auth, use_client};
use crate::diary::{refresh_entries, use_diary};
use crate::entry_card::EntryCard;
use crate::theme::use_display_prefs;
use crate::views::ModalOverlay;

/// Entry grid with the AI alert banners and questions above it.
#[component]
pub fn DashboardView() -> Element {
    let client = use_client();
    let auth = use_auth();
    let diary = use_diary();
    let prefs = use_display_prefs();
    let mut alerts = use_signal(Vec::<AiAlert>::new);
    let mut questions = use_signal(Vec::<AiQuestion>::new);
    let mut locked = use_signal(|| Option::<DiaryEntry>::None);

    // Refetch AI suggestions whenever the entry list or the account changes.
    let ai_client = client.clone();
    let _ = use_resource(move || {
        let client = ai_client.clone();
        let _ = diary.entries.read().len();
        let signed_in = auth.read().authenticated;
        async move {
            if !signed_in || !client.is_authenticated() {
                questions.set(Vec::new());
                alerts.set(Vec::new());
                return;
            }
            match client.ai_questions().await {
                Ok(list) => questions.set(list),
                Err(e) => report_api_error(auth, "fetch AI questions", &e),
            }
            match client.ai_alerts().await {
                Ok(list) => alerts.set(list),
                Err(e) => report_api_error(auth, "fetch AI alerts", &e),
            }
        }
    });

    let mut handle_unlock = move |entry_id: i64| {
        let client = client.clone();
        locked.set(None);
        spawn(async move {
            match client.unlock_entry(entry_id).await {
                Ok(()) => refresh_entries(&client, diary, auth).await,
                Err(e) => report_api_error(auth, "unlock entry", &e),
            }
        });
    };

    let blurred = prefs.is_blurred();

    rsx! {
        div {
            class: "dashboard-view container",
            header {
                class: "view-header",
                h1 { "My Diary" }
                p { class: "subtitle", "Your safe space for thoughts." }
            }

            if !alerts.read().is_empty() {
                div {
                    class: "ai-alerts",
                    for (i, alert) in alerts.read().iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "alert-banner alert-{alert.kind}",
                            span { class: "alert-title", "{alert.title}" }
                            span { class: "alert-message", "{alert.message}" }
                        }
                    }
                }
            }

            if !questions.read().is_empty() {
                AiQuestions { questions }
            }

            div {
                class: "entries-grid",
                div {
                    class: "entry-card create-card",
                    onclick: move |_| diary.open(auth, View::Write),
                    div { class: "icon-wrapper", "+" }
                    span { "New Entry" }
                }
                for entry in diary.entries.read().iter() {
                    EntryCard {
                        key: "{entry.id}",
                        entry: entry.clone(),
                        blurred,
                        on_open: move |entry: DiaryEntry| {
                            if entry.is_locked {
                                locked.set(Some(entry));
                            } else {
                                diary.open_entry(entry.id);
                            }
                        },
                    }
                }
            }

            button {
                class: "fab-button mobile-only",
                onclick: move |_| diary.open(auth, View::Write),
                "+"
            }
        }

        if let Some(entry) = locked() {
            LockedModal {
                on_close: move |_| locked.set(None),
                on_ready: move |_| handle_unlock(entry.id),
            }
        }
    }
}

#[component]
fn LockedModal(on_close: EventHandler<()>, on_ready: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div { class: "modal-icon", "🔒" }
            h3 { "Not yet..." }
            p { "It's not the right time to read this yet." }
            p { class: "modal-hint", "Maybe you should take a deep breath first?" }
            div {
                class: "modal-buttons",
                button { class: "btn-secondary", onclick: move |_| on_close.call(()), "I'll wait" }
                button { class: "btn-primary", onclick: move |_| on_ready.call(()), "I'm Ready" }
            }
        }
    }
}

/// Questions the assistant asks to learn about the user. Answering removes the
/// question locally once the server accepted the answer.
#[component]
fn AiQuestions(questions: Signal<Vec<AiQuestion>>) -> Element {
    let client = use_client();
    let auth = use_auth();
    let mut answers = use_signal(HashMap::<i64, String>::new);

    let submit = use_callback(move |question: AiQuestion| {
        let draft = answers.read().get(&question.id).cloned().unwrap_or_default();
        let Ok(answer) = validate_answer(&question, &draft) else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            match client.answer_question(&answer).await {
                Ok(()) => {
                    questions.write().retain(|q| q.id != question.id);
                    answers.write().remove(&question.id);
                }
                Err(e) => report_api_error(auth, "save answer", &e),
            }
        });
    });

    rsx! {
        div {
            class: "ai-questions glass-panel",
            h3 { "🤖 AI อยากรู้จักคุณมากขึ้น" }
            p { class: "ai-questions-subtitle", "ตอบคำถามเหล่านี้เพื่อให้ AI เข้าใจคุณดีขึ้น" }
            div {
                class: "questions-list",
                for question in questions.read().iter().cloned() {
                    div {
                        key: "{question.id}",
                        class: "question-card",
                        span { class: "question-text", "{question.text}" }
                        div {
                            class: "question-input-row",
                            input {
                                r#type: "text",
                                placeholder: "พิมพ์คำตอบ...",
                                value: answers.read().get(&question.id).cloned().unwrap_or_default(),
                                oninput: {
                                    let id = question.id;
                                    move |evt: FormEvent| {
                                        answers.write().insert(id, evt.value());
                                    }
                                },
                                onkeydown: {
                                    let question = question.clone();
                                    move |evt: KeyboardEvent| {
                                        if evt.key() == Key::Enter {
                                            submit.call(question.clone());
                                        }
                                    }
                                },
                            }
                            button {
                                disabled: answers.read().get(&question.id).map_or(true, |a| a.trim().is_empty()),
                                onclick: {
                                    let question = question.clone();
                                    move |_| submit.call(question.clone())
                                },
                                "ส่ง"
                            }
                        }
                    }
                }
            }
        }
    }
}
