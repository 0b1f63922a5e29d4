//! Running summary of the wizard selection (sidebar on desktop, bar on mobile).

use dioxus::prelude::*;

use crate::display::{format_long_date, format_price, format_time_12h};
use crate::models::{Master, Service};

#[derive(Props, Clone, PartialEq)]
pub struct SummaryProps {
    pub service: Option<Service>,
    pub master: Option<Master>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    pub time: Option<String>,
    pub currency_symbol: String,
    #[props(default)]
    pub service_image: Option<String>,
    #[props(default)]
    pub master_image: Option<String>,
}

#[component]
pub fn BookingSummary(props: SummaryProps) -> Element {
    let price = props
        .service
        .as_ref()
        .map(|s| format_price(&props.currency_symbol, s.price))
        .unwrap_or_default();
    let date = props.date.as_deref().map(format_long_date);
    let time = props.time.as_deref().map(format_time_12h);

    rsx! {
        div { class: "bg-white rounded-xl border p-5 sticky top-4",
            h3 { class: "text-lg font-semibold mb-4", "Booking Summary" }

            if let Some(service) = &props.service {
                div { class: "flex gap-3 mb-4",
                    if let Some(src) = &props.service_image {
                        img { class: "w-14 h-14 rounded-lg object-cover", src: "{src}", alt: "{service.name}" }
                    }
                    div {
                        h4 { class: "font-medium", "{service.name}" }
                        p { class: "text-sm text-gray-500", "{service.description}" }
                        p { class: "text-sm text-green-600 font-semibold",
                            "{price} • {service.duration} min"
                        }
                    }
                }
            } else {
                p { class: "text-gray-400 italic mb-4", "Select a service" }
            }

            if let Some(master) = &props.master {
                div { class: "flex gap-3 mb-4",
                    if let Some(src) = &props.master_image {
                        img { class: "w-14 h-14 rounded-full object-cover", src: "{src}", alt: "{master.name}" }
                    }
                    div {
                        h4 { class: "font-medium", "{master.name}" }
                        p { class: "text-sm text-green-600 font-semibold",
                            "⭐ {master.rating} ({master.total_reviews} reviews)"
                        }
                    }
                }
            } else {
                p { class: "text-gray-400 italic mb-4", "Select a master" }
            }

            if date.is_some() || time.is_some() {
                div { class: "mb-4 text-sm",
                    h4 { class: "font-medium mb-1", "Appointment Details:" }
                    if let Some(date) = &date {
                        p { strong { "Date: " } "{date}" }
                    }
                    if let Some(time) = &time {
                        p { strong { "Time: " } "{time}" }
                    }
                }
            }

            if props.service.is_some() {
                div { class: "border-t pt-3 flex justify-between font-semibold",
                    span { "Total:" }
                    span { class: "text-green-600 text-lg", "{price}" }
                }
            }
        }
    }
}

/// Compact bottom bar for small screens
#[component]
pub fn MobileSummary(props: SummaryProps) -> Element {
    let Some(service) = props.service.clone() else {
        return rsx! {};
    };
    let price = format_price(&props.currency_symbol, service.price);

    rsx! {
        div { class: "lg:hidden fixed bottom-0 inset-x-0 bg-white border-t shadow-lg px-4 py-3 flex items-center justify-between",
            div { class: "text-sm truncate",
                span { class: "font-medium", "{service.name}" }
                if let Some(master) = &props.master {
                    span { " • {master.name}" }
                }
                if let Some(date) = &props.date {
                    span { " • {date}" }
                }
                if let Some(time) = &props.time {
                    span { " • {time}" }
                }
            }
            div { class: "text-green-600 font-bold", "{price}" }
        }
    }
}
