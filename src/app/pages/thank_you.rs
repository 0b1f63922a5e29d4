use dioxus::prelude::*;

use crate::app::state::use_app_state;
use crate::app::Route;
use crate::display::{format_time_12h, format_weekday_date};

const NEXT_STEPS: [&str; 3] = [
    "We'll contact you via your preferred method to confirm the appointment",
    "You'll receive a reminder 24 hours before your appointment",
    "If you need to make changes, please contact us directly",
];

/// Confirmation page. Shows the booking handed over by the wizard; a reload
/// or direct visit has nothing to show.
#[component]
pub fn ThankYou() -> Element {
    let state = use_app_state();
    let nav = navigator();
    // Taken once per mount; the hand-off does not survive a revisit
    let booking = use_hook(move || state.take_confirmation());

    let Some(booking) = booking else {
        return rsx! {
            div { class: "text-center py-16",
                h1 { class: "text-3xl font-bold mb-2", "Oops!" }
                p { class: "text-gray-600 mb-6", "No booking information found." }
                button {
                    class: "bg-blue-600 text-white px-6 py-3 rounded-md font-medium hover:bg-blue-700",
                    onclick: move |_| {
                        nav.push(Route::Home {});
                    },
                    "Go Home"
                }
            }
        };
    };

    let date = format_weekday_date(&booking.date);
    let time = format_time_12h(&booking.time);
    let contact = booking.customer.contact_preference.label();
    let notes = booking.customer.notes.trim().to_string();

    rsx! {
        document::Title { "Thank You - BookMeHere" }

        div { class: "max-w-2xl mx-auto bg-white rounded-xl border p-8 text-center",
            div { class: "mx-auto mb-6 flex items-center justify-center w-20 h-20 rounded-full bg-green-100 text-green-600 text-4xl",
                "✓"
            }
            h1 { class: "text-3xl font-bold mb-2", "Thank You!" }
            p { class: "text-gray-600 mb-8",
                "Your booking has been confirmed. We'll contact you soon to finalize the details."
            }

            div { class: "text-left bg-gray-50 rounded-lg p-6 mb-6",
                h3 { class: "text-lg font-semibold mb-4", "Booking Summary" }
                dl { class: "grid grid-cols-3 gap-y-2 text-sm",
                    dt { class: "text-gray-500", "Service:" }
                    dd { class: "col-span-2 font-medium", "{booking.service.name}" }
                    dt { class: "text-gray-500", "Master:" }
                    dd { class: "col-span-2 font-medium", "{booking.master.name}" }
                    dt { class: "text-gray-500", "Date:" }
                    dd { class: "col-span-2 font-medium", "{date}" }
                    dt { class: "text-gray-500", "Time:" }
                    dd { class: "col-span-2 font-medium", "{time}" }
                    dt { class: "text-gray-500", "Contact Method:" }
                    dd { class: "col-span-2 font-medium", "{contact}" }
                    if !notes.is_empty() {
                        dt { class: "text-gray-500", "Notes:" }
                        dd { class: "col-span-2 font-medium", "{notes}" }
                    }
                }
            }

            div { class: "text-left mb-8",
                h3 { class: "text-lg font-semibold mb-2", "What's Next?" }
                ul { class: "list-disc pl-5 text-gray-600 space-y-1",
                    for step in NEXT_STEPS {
                        li { key: "{step}", "{step}" }
                    }
                }
            }

            div { class: "flex justify-center gap-4",
                button {
                    class: "border border-gray-300 bg-white px-6 py-3 rounded-md font-medium hover:bg-gray-50",
                    onclick: move |_| {
                        nav.push(Route::Book {});
                    },
                    "Book Another Service"
                }
                button {
                    class: "bg-blue-600 text-white px-6 py-3 rounded-md font-medium hover:bg-blue-700",
                    onclick: move |_| {
                        nav.push(Route::Home {});
                    },
                    "Go Home"
                }
            }
        }
    }
}
