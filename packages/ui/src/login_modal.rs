//! Sign-in and registration forms, shown together in the login modal.

use dioxus::prelude::*;
use store::forms::{validate_login, validate_registration};
use store::UserProfile;

use crate::auth::{use_auth, use_client, AuthState};
use crate::views::ModalOverlay;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

/// Modal wrapper that switches between [`LoginForm`] and [`RegisterForm`].
#[component]
pub fn LoginModal() -> Element {
    let mut auth = use_auth();
    let mut mode = use_signal(|| AuthMode::Login);
    let mut notice = use_signal(|| Option::<String>::None);

    if !auth.read().show_login {
        return rsx! {};
    }

    let form = match mode() {
        AuthMode::Login => rsx! {
            LoginForm {
                notice: notice(),
                on_register: move |_| {
                    notice.set(None);
                    mode.set(AuthMode::Register);
                },
            }
        },
        AuthMode::Register => rsx! {
            RegisterForm {
                on_registered: move |_| {
                    notice.set(Some("สร้างบัญชีสำเร็จ! กรุณาเข้าสู่ระบบ".to_string()));
                    mode.set(AuthMode::Login);
                },
                on_login: move |_| mode.set(AuthMode::Login),
            }
        },
    };

    rsx! {
        ModalOverlay {
            class: "auth-modal",
            on_close: move |_| auth.write().show_login = false,
            {form}
        }
    }
}

#[component]
pub fn LoginForm(notice: Option<String>, on_register: EventHandler<()>) -> Element {
    let client = use_client();
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let credentials = match validate_login(&username(), &password()) {
                Ok(credentials) => credentials,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };

            loading.set(true);
            match client.login(&credentials).await {
                Ok(reply) => {
                    auth.set(AuthState::signed_in(UserProfile {
                        username: reply.username,
                        display_name: reply.display_name,
                        avatar: reply.avatar,
                    }));
                }
                Err(e) => {
                    tracing::warn!("Login failed: {e}");
                    loading.set(false);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-form",
            h2 { "ยินดีต้อนรับกลับมา" }

            if let Some(msg) = notice {
                div { class: "form-notice", "{msg}" }
            }
            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            form {
                onsubmit: handle_login,
                label { r#for: "login-username", "ชื่อผู้ใช้" }
                input {
                    id: "login-username",
                    r#type: "text",
                    placeholder: "กรอกชื่อผู้ใช้",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                label { r#for: "login-password", "รหัสผ่าน" }
                input {
                    id: "login-password",
                    r#type: "password",
                    placeholder: "กรอกรหัสผ่าน",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "กำลังเข้าสู่ระบบ..." } else { "เข้าสู่ระบบ" }
                }
            }

            div {
                class: "auth-switch",
                span { "ยังไม่มีบัญชี? " }
                button {
                    class: "btn-text",
                    onclick: move |_| on_register.call(()),
                    "สร้างบัญชีใหม่"
                }
            }
        }
    }
}

#[component]
pub fn RegisterForm(on_registered: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let client = use_client();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            let credentials =
                match validate_registration(&username(), &password(), &confirm_password()) {
                    Ok(credentials) => credentials,
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        return;
                    }
                };

            loading.set(true);
            match client.register(&credentials).await {
                Ok(()) => {
                    tracing::info!("Registered {}", credentials.username);
                    on_registered.call(());
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {e}");
                    loading.set(false);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-form",
            h2 { "สร้างบัญชีใหม่" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            form {
                onsubmit: handle_register,
                label { r#for: "register-username", "ชื่อผู้ใช้" }
                input {
                    id: "register-username",
                    r#type: "text",
                    placeholder: "ระบุชื่อผู้ใช้",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                label { r#for: "register-password", "รหัสผ่าน" }
                input {
                    id: "register-password",
                    r#type: "password",
                    placeholder: "ตั้งรหัสผ่าน",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                label { r#for: "register-confirm", "ยืนยันรหัสผ่าน" }
                input {
                    id: "register-confirm",
                    r#type: "password",
                    placeholder: "ยืนยันรหัสผ่านอีกครั้ง",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
                button {
                    class: "btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "กำลังสร้างบัญชี..." } else { "ลงทะเบียน" }
                }
            }

            div {
                class: "auth-switch",
                span { "มีบัญชีอยู่แล้ว? " }
                button {
                    class: "btn-text",
                    onclick: move |_| on_login.call(()),
                    "เข้าสู่ระบบ"
                }
            }
        }
    }
}
