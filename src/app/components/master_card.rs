use dioxus::prelude::*;

use crate::models::Master;

/// Skills shown on a card before it gets crowded
const MAX_SKILLS: usize = 3;

#[component]
pub fn MasterCard(
    master: Master,
    image_url: Option<String>,
    selected: bool,
    /// Another master is selected
    dimmed: bool,
    on_select: EventHandler<()>,
) -> Element {
    let state_class = if selected {
        "ring-2 ring-blue-600 border-blue-600"
    } else if dimmed {
        "opacity-50 hover:opacity-100"
    } else {
        "hover:shadow-md"
    };

    rsx! {
        div {
            class: "bg-white rounded-xl border p-4 text-center cursor-pointer transition {state_class}",
            onclick: move |_| on_select.call(()),
            if let Some(src) = image_url {
                img { class: "w-20 h-20 rounded-full object-cover mx-auto mb-3", src: "{src}", alt: "{master.name}" }
            }
            h3 { class: "font-semibold", "{master.name}" }
            div { class: "text-sm mt-1",
                span { class: "text-yellow-600 font-medium", "⭐ {master.rating}" }
                span { class: "text-gray-500 ml-1", "({master.total_reviews} reviews)" }
            }
            if !master.skills.is_empty() {
                div { class: "flex flex-wrap justify-center gap-1 mt-3",
                    for skill in master.skills.iter().take(MAX_SKILLS) {
                        span {
                            key: "{skill.id}",
                            class: "bg-gray-100 text-gray-700 text-xs rounded-full px-2 py-1",
                            "{skill.emoji} {skill.name}"
                        }
                    }
                }
            }
        }
    }
}
