//! Booking row for the dashboards.

use dioxus::prelude::*;

use crate::booking::PendingBackendOperation;
use crate::display::{format_long_date, format_time_12h, status_badge_class};
use crate::models::Booking;

/// One action button under a booking
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BookingAction {
    pub label: &'static str,
    /// Destructive actions render in red
    pub danger: bool,
    pub operation: PendingBackendOperation,
}

#[component]
pub fn BookingCard(
    booking: Booking,
    /// Show customer contact details (admin view)
    #[props(default = false)]
    show_customer: bool,
    actions: Vec<BookingAction>,
    on_action: EventHandler<PendingBackendOperation>,
) -> Element {
    let service = booking.service_name.clone().unwrap_or_else(|| "Service".to_string());
    let date = format_long_date(booking.slot_date());
    let time = format_time_12h(booking.slot_time());
    let booked_on = format_long_date(&booking.created_at);
    let badge = status_badge_class(&booking.status);

    rsx! {
        div { class: "bg-white rounded-xl border p-5",
            div { class: "flex justify-between items-start gap-4 mb-4",
                div { class: "flex-1",
                    h3 { class: "text-lg font-semibold mb-2", "{service}" }
                    div { class: "grid sm:grid-cols-2 gap-1 text-sm text-gray-600",
                        if let Some(master) = &booking.master_name {
                            p { strong { "Master: " } "{master}" }
                        }
                        p { strong { "Date: " } "{date}" }
                        p { strong { "Time: " } "{time}" }
                        if show_customer {
                            p { strong { "Customer: " } "{booking.customer_name}" }
                            p { strong { "Phone: " } "{booking.customer_phone}" }
                            p { strong { "Email: " } "{booking.customer_email}" }
                        }
                        if let Some(notes) = booking.notes() {
                            p { class: "sm:col-span-2", strong { "Notes: " } "{notes}" }
                        }
                    }
                }
                div { class: "text-right",
                    span { class: "px-3 py-1 rounded-full text-sm font-medium {badge}", "{booking.status}" }
                    if !booking.created_at.is_empty() {
                        p { class: "text-gray-500 text-xs mt-2", "Booked on {booked_on}" }
                    }
                }
            }
            if !actions.is_empty() {
                div { class: "flex gap-3 pt-4 border-t",
                    for action in actions {
                        button {
                            key: "{action.label}",
                            class: if action.danger {
                                "px-4 py-2 rounded-md text-sm border border-red-500 text-red-600 hover:bg-red-50"
                            } else {
                                "px-4 py-2 rounded-md text-sm border border-gray-300 hover:bg-gray-50"
                            },
                            onclick: move |_| on_action.call(action.operation),
                            "{action.label}"
                        }
                    }
                }
            }
        }
    }
}
