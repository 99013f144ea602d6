use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a glass card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    /// Extra classes for the card, e.g. `ai-result-modal`.
    #[props(default)]
    class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content glass-panel {class}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

