use dioxus::prelude::*;
use store::models::{ProfileUpdate, AVATAR_OPTIONS};
use store::UserProfile;

use crate::auth::{report_api_error, use_auth, use_client};
use crate::views::ModalOverlay;

/// Edit display name and avatar. Saving refetches the profile from the server.
#[component]
pub fn ProfileSettings(profile: UserProfile, on_close: EventHandler<()>) -> Element {
    let client = use_client();
    let mut auth = use_auth();
    let mut display_name = use_signal(|| profile.display_name.clone());
    let mut avatar = use_signal(|| profile.avatar.clone());
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            saving.set(true);
            let update = ProfileUpdate {
                display_name: display_name(),
                avatar: avatar(),
            };
            match client.update_profile(&update).await {
                Ok(()) => match client.profile().await {
                    Ok(profile) => auth.write().profile = Some(profile),
                    Err(e) => report_api_error(auth, "reload profile", &e),
                },
                Err(e) => report_api_error(auth, "update profile", &e),
            }
            saving.set(false);
            on_close.call(());
        });
    };

    let current = avatar();
    let preview = current.trim().to_string();

    rsx! {
        ModalOverlay {
            class: "profile-modal",
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-header",
                h2 { "แก้ไขโปรไฟล์" }
                button { class: "close-btn", onclick: move |_| on_close.call(()), "×" }
            }

            form {
                class: "profile-form",
                onsubmit: handle_save,

                div {
                    class: "profile-preview-section",
                    div {
                        class: "avatar-preview-ring",
                        if preview.is_empty() {
                            div { class: "avatar-placeholder-xl", "{profile.initial()}" }
                        } else {
                            span { class: "avatar-xl", "{preview}" }
                        }
                        button {
                            r#type: "button",
                            class: "edit-avatar-hint",
                            onclick: move |_| avatar.set(String::new()),
                            "✎"
                        }
                    }
                    p { class: "preview-label", "@{profile.username}" }
                }

                div {
                    class: "form-section",
                    label { class: "section-label", "ชื่อที่แสดง" }
                    input {
                        r#type: "text",
                        class: "modern-input",
                        placeholder: "ชื่อของคุณคือ?",
                        value: display_name(),
                        oninput: move |evt: FormEvent| display_name.set(evt.value()),
                    }
                }

                div {
                    class: "form-section",
                    label { class: "section-label", "เลือกรูปประจำตัว" }
                    div {
                        class: "emoji-grid-modern",
                        for emoji in AVATAR_OPTIONS {
                            button {
                                key: "{emoji}",
                                r#type: "button",
                                class: if current == emoji { "emoji-choice active" } else { "emoji-choice" },
                                onclick: move |_| avatar.set(emoji.to_string()),
                                "{emoji}"
                            }
                        }
                    }
                    input {
                        r#type: "text",
                        class: "modern-input-small",
                        placeholder: "หรือวางอีโมจิ/URL ที่นี่",
                        value: avatar(),
                        oninput: move |evt: FormEvent| avatar.set(evt.value()),
                    }
                }

                div {
                    class: "modal-footer",
                    button {
                        r#type: "button",
                        class: "btn-ghost",
                        onclick: move |_| on_close.call(()),
                        "ยกเลิก"
                    }
                    button {
                        r#type: "submit",
                        class: "btn-gradient",
                        disabled: saving(),
                        if saving() { "กำลังบันทึก..." } else { "บันทึกการเปลี่ยนแปลง" }
                    }
                }
            }
        }
    }
}

/// Confirmation before signing out.
#[component]
pub fn LogoutModal(on_close: EventHandler<()>, on_confirm: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div { class: "modal-icon", "⚠️" }
            h3 { "ยืนยันการออกจากระบบ" }
            p { "คุณแน่ใจหรือไม่ว่าต้องการออกจากระบบ?" }
            div {
                class: "modal-buttons",
                button { class: "btn-secondary", onclick: move |_| on_close.call(()), "ยกเลิก" }
                button { class: "btn-danger", onclick: move |_| on_confirm.call(()), "ออกจากระบบ" }
            }
        }
    }
}
