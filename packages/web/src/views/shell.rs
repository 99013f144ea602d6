use dioxus::prelude::*;

use store::View;
use ui::views::{CalendarView, DashboardView, ReadView, SummaryView, WriteView};
use ui::{
    prompt_login, refresh_entries, report_api_error, use_auth, use_client, use_diary,
    use_unlock_notifier, LoginModal, Sidebar,
};

/// Sidebar, the active screen and the login modal. Owns the work that has to
/// outlive any single screen: entry refreshes, unlock notifications and
/// deletes.
#[component]
pub fn DiaryShell() -> Element {
    let client = use_client();
    let auth = use_auth();
    let diary = use_diary();

    use_unlock_notifier(diary.entries);

    let screen = use_memo(move || diary.view.read().view());
    let opened = use_memo(move || diary.view.read().read().map(|r| r.entry_id));
    let authenticated = use_memo(move || auth.read().authenticated);

    // Logout and session resets leave nothing from the old account on screen.
    use_effect(move || {
        if !authenticated() {
            diary.sign_out();
        }
    });

    // Every screen change and every sign-in shows the server's current list.
    let refresh_client = client.clone();
    let _ = use_resource(move || {
        let client = refresh_client.clone();
        let _ = (screen(), authenticated());
        async move { refresh_entries(&client, diary, auth).await }
    });

    let on_delete = move |entry_id: i64| {
        let mut view = diary.view;
        if view.peek().require_delete(auth.peek().authenticated).is_err() {
            prompt_login(auth);
            return;
        }
        view.write().entry_deleted(entry_id);
        let client = client.clone();
        spawn(async move {
            match client.delete_entry(entry_id).await {
                Ok(()) => {
                    tracing::info!("Deleted entry {entry_id}");
                    refresh_entries(&client, diary, auth).await;
                }
                Err(e) => report_api_error(auth, "delete entry", &e),
            }
        });
    };

    let content = match (screen(), opened()) {
        (View::Read, Some(entry_id)) => rsx! {
            ReadView { key: "{entry_id}", entry_id, on_delete }
        },
        (View::Write, _) => rsx! { WriteView {} },
        (View::Summary, _) => rsx! { SummaryView {} },
        (View::Calendar, _) => rsx! { CalendarView {} },
        _ => rsx! { DashboardView {} },
    };

    rsx! {
        div {
            class: "app-layout",
            Sidebar {}
            main {
                class: "main-content",
                div { class: "container", {content} }
            }
        }
        LoginModal {}
    }
}
