use dioxus::prelude::*;

use super::booking_list::{run_pending, use_booking_list};
use crate::app::components::{BookingAction, BookingCard, ErrorAlert, ProtectedRoute, Spinner};
use crate::app::state::use_app_state;
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::booking::{scope_to_customer, PendingBackendOperation};
use crate::session::guard::Requirement;

/// `/dashboard`: the signed-in customer's bookings
#[component]
pub fn UserDashboard() -> Element {
    rsx! {
        document::Title { "My Bookings - BookMeHere" }
        ProtectedRoute { requirement: Requirement::AUTH,
            MyBookings {}
        }
    }
}

#[component]
fn MyBookings() -> Element {
    let state = use_app_state();
    let toast = use_toast();
    let nav = navigator();
    let list = use_booking_list();

    let auth = state.auth();
    let session = auth.current();
    let greeting = session
        .as_ref()
        .map(|s| s.user.display_name().to_string())
        .unwrap_or_default();
    // Scope by the customer session's e-mail; an admin browsing here sees everything
    let email = auth.customer.as_ref().and_then(|u| u.email.clone());

    let on_logout = move |_| {
        let Some(session) = state.auth().current() else {
            return;
        };
        spawn(async move {
            state.logout(session.role).await;
            nav.push(Route::Home {});
        });
    };

    let (bookings, scoped) = scope_to_customer(list.bookings.read().clone(), email.as_deref());

    rsx! {
        div { class: "bg-white rounded-xl border p-6 mb-8 flex flex-wrap gap-4 justify-between items-center",
            div {
                h1 { class: "text-3xl font-bold mb-1", "My Bookings" }
                p { class: "text-gray-600", "Welcome back, {greeting}! Manage your appointments here." }
            }
            div { class: "flex gap-3",
                button {
                    class: "bg-blue-600 text-white px-4 py-2 rounded-md font-medium hover:bg-blue-700",
                    onclick: move |_| {
                        nav.push(Route::Book {});
                    },
                    "Book New Appointment"
                }
                button {
                    class: "border border-red-500 text-red-600 px-4 py-2 rounded-md font-medium hover:bg-red-50",
                    onclick: on_logout,
                    "Logout"
                }
            }
        }

        if (list.loading)() {
            Spinner { label: "Loading your bookings...".to_string() }
        } else if let Some(message) = (list.error)() {
            ErrorAlert { message, on_retry: move |_| list.reload() }
        } else if bookings.is_empty() {
            div { class: "bg-white rounded-xl border p-12 text-center",
                div { class: "text-6xl mb-4", "📅" }
                h3 { class: "text-xl font-semibold mb-2", "No Bookings Yet" }
                p { class: "text-gray-600 mb-6", "You haven't made any bookings yet. Book your first appointment!" }
                button {
                    class: "bg-blue-600 text-white px-6 py-3 rounded-md font-medium hover:bg-blue-700",
                    onclick: move |_| {
                        nav.push(Route::Book {});
                    },
                    "Book Now"
                }
            }
        } else {
            if !scoped {
                p { class: "mb-4 rounded-lg bg-yellow-50 border border-yellow-200 text-yellow-800 text-sm p-3",
                    "Showing all bookings. Your account has no e-mail to match bookings against."
                }
            }
            div { class: "grid gap-4",
                for booking in bookings {
                    {
                        let booking_id = booking.id;
                        rsx! {
                            BookingCard {
                                key: "{booking_id}",
                                booking,
                                actions: vec![
                                    BookingAction {
                                        label: "Edit",
                                        danger: false,
                                        operation: PendingBackendOperation::Edit { booking_id },
                                    },
                                    BookingAction {
                                        label: "Cancel",
                                        danger: true,
                                        operation: PendingBackendOperation::Cancel { booking_id },
                                    },
                                ],
                                on_action: move |op| run_pending(op, toast),
                            }
                        }
                    }
                }
            }
        }
    }
}
