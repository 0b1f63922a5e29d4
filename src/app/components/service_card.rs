use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::display::format_price;
use crate::models::Service;

/// Image URL for a service, cache-busted by its last update
pub fn service_image_url(api: &ApiClient, service: &Service) -> Option<String> {
    service
        .image_path
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(|path| format!("{}?v={}", api.media_url(path), urlencoding::encode(&service.updated_at)))
}

/// Catalogue card. Clicking anywhere calls `on_select`; with `action_label`
/// a button is rendered as well.
#[component]
pub fn ServiceCard(
    service: Service,
    image_url: Option<String>,
    currency_symbol: String,
    #[props(default = false)]
    selected: bool,
    #[props(default)]
    action_label: Option<&'static str>,
    on_select: EventHandler<()>,
) -> Element {
    let ring = if selected {
        "ring-2 ring-blue-600 border-blue-600"
    } else {
        "hover:shadow-md"
    };
    let description = if service.description.trim().is_empty() {
        "Professional service".to_string()
    } else {
        service.description.clone()
    };
    let price = format_price(&currency_symbol, service.price);

    rsx! {
        div {
            class: "bg-white rounded-xl border p-4 cursor-pointer transition {ring}",
            onclick: move |_| on_select.call(()),
            if let Some(src) = image_url {
                img { class: "w-full h-40 object-cover rounded-lg mb-3", src: "{src}", alt: "{service.name}" }
            }
            h3 { class: "text-lg font-semibold mb-1", "{service.name}" }
            p { class: "text-gray-600 text-sm mb-3", "{description}" }
            div { class: "flex justify-between items-center",
                span { class: "text-green-600 font-semibold", "{price}" }
                span { class: "text-gray-500 text-sm", "{service.duration} min" }
            }
            if let Some(label) = action_label {
                button {
                    class: "mt-4 w-full bg-blue-600 text-white rounded-md py-2 font-medium hover:bg-blue-700",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_select.call(());
                    },
                    "{label}"
                }
            }
        }
    }
}
