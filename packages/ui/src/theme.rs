//! Light/dark theme and privacy blur, persisted through [`store::Preferences`].

use dioxus::prelude::*;
use store::{Preferences, SharedStore, Theme};

/// Display preferences shared through context.
#[derive(Clone)]
pub struct DisplayPrefs {
    prefs: Preferences,
    pub theme: Signal<Theme>,
    pub privacy_blur: Signal<bool>,
}

impl DisplayPrefs {
    pub fn toggle_theme(&mut self) {
        let next = self.theme.peek().toggled();
        self.prefs.set_theme(next);
        self.theme.set(next);
    }

    pub fn toggle_privacy_blur(&mut self) {
        let next = !*self.privacy_blur.peek();
        self.prefs.set_privacy_blur(next);
        self.privacy_blur.set(next);
    }

    pub fn is_blurred(&self) -> bool {
        (self.privacy_blur)()
    }
}

pub fn use_display_prefs() -> DisplayPrefs {
    use_context::<DisplayPrefs>()
}

/// Load persisted preferences, apply the theme and provide [`DisplayPrefs`].
/// Expects a [`SharedStore`] in context.
pub fn use_display_prefs_provider() -> DisplayPrefs {
    let shared = use_context::<SharedStore>();
    let prefs = use_hook(|| Preferences::from_shared(shared));
    let theme = use_signal(|| prefs.theme());
    let privacy_blur = use_signal(|| prefs.privacy_blur());

    use_effect(move || apply_theme(theme()));

    use_context_provider(|| DisplayPrefs {
        prefs,
        theme,
        privacy_blur,
    })
}

/// Set `data-theme` on the document element.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("theme set to {}", theme.as_str());
    }
}
