//! Inline error panel with a retry button.

use dioxus::prelude::*;

/// Shown in place of a list that failed to load.
#[component]
pub fn ErrorAlert(
    /// The error message to display
    message: String,
    /// Called when the retry button is clicked
    on_retry: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "rounded-lg border border-red-200 bg-red-50 text-red-700 p-4 flex items-center gap-3",
            span { "{message}" }
            button {
                class: "ml-auto px-3 py-1 rounded-md border border-red-300 text-sm hover:bg-red-100",
                onclick: move |_| on_retry.call(()),
                "Try again"
            }
        }
    }
}
