//! Shell layout wrapping every route with header, footer and toasts.

use dioxus::prelude::*;

use super::footer::Footer;
use super::nav::Nav;
use crate::app::toast::ToastHost;
use crate::app::Route;

/// Route layout: chrome around the matched page.
#[component]
pub fn Shell() -> Element {
    rsx! {
        // Tailwind utilities (Play CDN; no build step for styles)
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        div { class: "min-h-screen flex flex-col bg-gray-50 text-gray-900",
            Nav {}
            main { class: "flex-1 w-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                Outlet::<Route> {}
            }
            Footer {}
        }
        ToastHost {}
    }
}

/// Centered spinner with an optional caption
#[component]
pub fn Spinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-12 gap-3",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600" }
            if let Some(label) = label {
                p { class: "text-gray-500", "{label}" }
            }
        }
    }
}
