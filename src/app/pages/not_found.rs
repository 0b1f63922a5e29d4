use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No route for /{}", segments.join("/"));

    rsx! {
        document::Title { "Page Not Found - BookMeHere" }

        div { class: "text-center py-16",
            h1 { class: "text-6xl font-bold text-gray-300 mb-4", "404" }
            h2 { class: "text-2xl font-semibold mb-2", "Page Not Found" }
            p { class: "text-gray-600 mb-6", "The page you're looking for doesn't exist." }
            Link {
                to: Route::Home {},
                class: "bg-blue-600 text-white px-6 py-3 rounded-md font-medium hover:bg-blue-700",
                "Go Home"
            }
        }
    }
}
