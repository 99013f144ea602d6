use dioxus::prelude::*;
use store::{Theme, View};

use crate::auth::{prompt_login, use_auth, use_client, AuthState};
use crate::diary::use_diary;
use crate::icons::{FaBook, FaCalendarDays, FaChartPie, FaEye, FaEyeSlash, FaMoon, FaSun};
use crate::profile_settings::{LogoutModal, ProfileSettings};
use crate::theme::use_display_prefs;
use crate::Icon;

const NAV_ITEMS: [(View, &str); 3] = [
    (View::Dashboard, "My Diary"),
    (View::Summary, "Summary"),
    (View::Calendar, "Calendar"),
];

#[component]
pub fn Sidebar() -> Element {
    let diary = use_diary();
    let auth = use_auth();
    let mut prefs = use_display_prefs();
    let mut blur_prefs = prefs.clone();
    let active = diary.view.read().view();
    let dark = (prefs.theme)() == Theme::Dark;
    let blurred = prefs.is_blurred();

    rsx! {
        aside {
            class: "sidebar glass-panel",

            UserHeader {}

            nav {
                class: "sidebar-nav",
                for (target, label) in NAV_ITEMS {
                    button {
                        key: "{label}",
                        class: if active == target { "nav-item active" } else { "nav-item" },
                        onclick: move |_| diary.open(auth, target),
                        {nav_icon(target)}
                        span { "{label}" }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                button {
                    class: "sidebar-toggle",
                    title: if dark { "Light mode" } else { "Dark mode" },
                    onclick: move |_| prefs.toggle_theme(),
                    if dark {
                        Icon { icon: FaSun, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaMoon, width: 16, height: 16 }
                    }
                }
                button {
                    class: if blurred { "sidebar-toggle active" } else { "sidebar-toggle" },
                    title: "Privacy blur",
                    onclick: move |_| blur_prefs.toggle_privacy_blur(),
                    if blurred {
                        Icon { icon: FaEyeSlash, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaEye, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}

fn nav_icon(target: View) -> Element {
    match target {
        View::Summary => rsx! { Icon { icon: FaChartPie, width: 18, height: 18 } },
        View::Calendar => rsx! { Icon { icon: FaCalendarDays, width: 18, height: 18 } },
        _ => rsx! { Icon { icon: FaBook, width: 18, height: 18 } },
    }
}

/// Avatar and name; opens profile settings, or the login modal when signed out.
#[component]
fn UserHeader() -> Element {
    let client = use_client();
    let mut auth = use_auth();
    let diary = use_diary();
    let mut show_profile = use_signal(|| false);
    let mut show_logout = use_signal(|| false);
    let state = auth();

    if !state.authenticated {
        return rsx! {
            div {
                class: "sidebar-header",
                button {
                    class: "btn-primary sidebar-login",
                    onclick: move |_| prompt_login(auth),
                    "เข้าสู่ระบบ"
                }
            }
        };
    }

    let profile = state.profile.unwrap_or_default();
    let label = profile.display_label().to_string();
    let avatar = profile.avatar().map(str::to_string);
    let initial = profile.initial();

    let handle_logout = move |_: ()| {
        client.logout();
        diary.sign_out();
        auth.set(AuthState::default());
        show_logout.set(false);
    };

    rsx! {
        div {
            class: "sidebar-header",
            button {
                class: "sidebar-user",
                title: "แก้ไขโปรไฟล์",
                onclick: move |_| show_profile.set(true),
                if let Some(avatar) = avatar {
                    span { class: "sidebar-avatar", "{avatar}" }
                } else {
                    span { class: "sidebar-avatar avatar-placeholder", "{initial}" }
                }
                span { class: "sidebar-user-name", "{label}" }
            }
            button {
                class: "sidebar-logout",
                title: "ออกจากระบบ",
                onclick: move |_| show_logout.set(true),
                "⎋"
            }
        }

        if show_profile() {
            ProfileSettings {
                profile: profile.clone(),
                on_close: move |_| show_profile.set(false),
            }
        }
        if show_logout() {
            LogoutModal {
                on_close: move |_| show_logout.set(false),
                on_confirm: handle_logout,
            }
        }
    }
}
