use dioxus::prelude::*;
use store::models::MOOD_OPTIONS;
use store::{DiaryConfig, EntryDraft};

use crate::auth::{report_api_error, use_auth, use_client};
use crate::diary::{refresh_entries, use_diary};
use crate::speech::{speech_supported, SpeechSession};

/// New entry form: title, mood picker, content with optional dictation.
#[component]
pub fn WriteView() -> Element {
    let client = use_client();
    let auth = use_auth();
    let diary = use_diary();
    let lang = use_context::<DiaryConfig>().speech.lang;
    let mut draft = use_signal(EntryDraft::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut speech = use_signal(|| Option::<SpeechSession>::None);
    let mut listening = use_signal(|| false);
    let can_dictate = use_hook(speech_supported);

    let handle_seal = move |_: MouseEvent| {
        if saving() {
            return;
        }
        let new_entry = match draft.read().validate() {
            Ok(new_entry) => new_entry,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        let client = client.clone();
        spawn(async move {
            match client.create_entry(&new_entry).await {
                Ok(()) => {
                    draft.set(EntryDraft::default());
                    refresh_entries(&client, diary, auth).await;
                    diary.back();
                }
                Err(e) => {
                    report_api_error(auth, "save entry", &e);
                    error.set(Some(e.user_message()));
                }
            }
            saving.set(false);
        });
    };

    let toggle_dictation = move |_: MouseEvent| {
        if listening() {
            if let Some(session) = speech.write().take() {
                session.stop();
            }
            listening.set(false);
            return;
        }
        let started = SpeechSession::start(
            &lang,
            move |text| draft.write().append_transcript(&text),
            move || listening.set(false),
        );
        match started {
            Ok(session) => {
                speech.set(Some(session));
                listening.set(true);
            }
            Err(e) => tracing::warn!("{e}"),
        }
    };

    let current = draft.read().clone();
    let listening = listening();

    rsx! {
        div {
            class: "writer-view container",
            div {
                class: "glass-panel writer-panel",
                div {
                    class: "writer-header",
                    h2 { "New Entry" }
                    button { class: "btn-text", onclick: move |_| diary.back(), "Cancel" }
                }

                input {
                    r#type: "text",
                    class: "diary-title-input",
                    placeholder: "Title your thought...",
                    value: current.title.clone(),
                    oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                }

                div {
                    class: "mood-picker",
                    span { class: "mood-label", "How are you feeling?" }
                    div {
                        class: "mood-options",
                        for mood in MOOD_OPTIONS {
                            button {
                                key: "{mood}",
                                class: if current.mood == mood { "mood-btn selected" } else { "mood-btn" },
                                onclick: move |_| draft.write().toggle_mood(mood),
                                "{mood}"
                            }
                        }
                    }
                }

                div {
                    class: "textarea-wrapper",
                    textarea {
                        class: "diary-input",
                        autofocus: true,
                        placeholder: if listening { "🎤 กำลังฟัง... พูดได้เลย!" } else { "What's on your mind today? Let it all out..." },
                        value: current.content.clone(),
                        oninput: move |evt: FormEvent| draft.write().content = evt.value(),
                    }
                    if can_dictate {
                        button {
                            class: if listening { "voice-btn listening" } else { "voice-btn" },
                            title: if listening { "หยุดฟัง" } else { "พูดแทนการพิมพ์" },
                            onclick: toggle_dictation,
                            if listening { "⏹️" } else { "🎤" }
                        }
                    }
                }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                div {
                    class: "writer-actions",
                    button {
                        class: "btn-primary",
                        disabled: saving(),
                        onclick: handle_seal,
                        "Seal & Release"
                    }
                }
            }
        }
    }
}
