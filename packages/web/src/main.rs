use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use store::DiaryConfig;
use ui::{platform_store, use_diary_provider, use_display_prefs_provider, AuthProvider};
use views::DiaryShell;

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../diary.toml");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {e}");
    }
    dioxus::launch(App);
}

fn load_config() -> DiaryConfig {
    match DiaryConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {e}", DiaryConfig::filename());
            DiaryConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);
    use_context_provider(platform_store);
    use_display_prefs_provider();
    use_diary_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::DIARY_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            DiaryShell {}
        }
    }
}
