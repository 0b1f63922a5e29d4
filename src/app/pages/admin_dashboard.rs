//! Admin dashboard: every booking, with stats and a status filter.

use dioxus::prelude::*;

use super::booking_list::{run_pending, use_booking_list};
use crate::app::components::{
    BookingAction, BookingCard, ErrorAlert, ProtectedRoute, SelectField, Spinner,
};
use crate::app::state::use_app_state;
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::booking::{BookingFilter, BookingStats, PendingBackendOperation};
use crate::models::{BookingId, BookingStatus};
use crate::session::guard::Requirement;
use crate::session::SessionRole;

fn admin_actions(booking_id: BookingId) -> Vec<BookingAction> {
    vec![
        BookingAction {
            label: "Confirm",
            danger: false,
            operation: PendingBackendOperation::UpdateStatus {
                booking_id,
                status: BookingStatus::Confirmed,
            },
        },
        BookingAction {
            label: "Cancel",
            danger: false,
            operation: PendingBackendOperation::UpdateStatus {
                booking_id,
                status: BookingStatus::Cancelled,
            },
        },
        BookingAction {
            label: "Delete",
            danger: true,
            operation: PendingBackendOperation::Delete { booking_id },
        },
    ]
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        document::Title { "Admin Dashboard - BookMeHere" }
        ProtectedRoute { requirement: Requirement::ADMIN,
            AllBookings {}
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: usize, color: &'static str) -> Element {
    rsx! {
        div { class: "rounded-lg bg-gray-50 p-4 text-center",
            div { class: "text-3xl font-bold {color}", "{value}" }
            div { class: "text-sm text-gray-600", "{label}" }
        }
    }
}

#[component]
fn AllBookings() -> Element {
    let state = use_app_state();
    let toast = use_toast();
    let nav = navigator();
    let list = use_booking_list();
    let mut filter = use_signal(BookingFilter::default);

    let on_logout = move |_| {
        spawn(async move {
            state.logout(SessionRole::Admin).await;
            nav.push(Route::Home {});
        });
    };

    let all = list.bookings.read().clone();
    let stats = BookingStats::from_bookings(&all);
    let current_filter = filter();
    let shown: Vec<_> = current_filter.apply(&all).into_iter().cloned().collect();
    let filter_options: Vec<(&'static str, &'static str)> = BookingFilter::ALL
        .iter()
        .map(|f| (f.as_str(), f.label()))
        .collect();

    rsx! {
        div { class: "bg-white rounded-xl border p-6 mb-8",
            div { class: "flex flex-wrap gap-4 justify-between items-center mb-4",
                div {
                    h1 { class: "text-3xl font-bold mb-1", "Admin Dashboard" }
                    p { class: "text-gray-600", "Manage all bookings and business operations" }
                }
                button {
                    class: "border border-gray-300 px-4 py-2 rounded-md font-medium hover:bg-gray-50",
                    onclick: on_logout,
                    "Logout"
                }
            }
            div { class: "grid grid-cols-3 gap-4",
                StatCard { label: "Total Bookings", value: stats.total, color: "text-blue-600" }
                StatCard { label: "Confirmed", value: stats.confirmed, color: "text-green-600" }
                StatCard { label: "Pending", value: stats.pending, color: "text-yellow-600" }
            }
        }

        div { class: "max-w-xs mb-6",
            SelectField {
                label: "Filter by status:",
                options: filter_options,
                selected: current_filter.as_str().to_string(),
                on_change: move |v: String| filter.set(BookingFilter::parse(&v)),
            }
        }

        if (list.loading)() {
            Spinner { label: "Loading bookings...".to_string() }
        } else if let Some(message) = (list.error)() {
            ErrorAlert { message, on_retry: move |_| list.reload() }
        } else if shown.is_empty() {
            div { class: "bg-white rounded-xl border p-12 text-center",
                div { class: "text-6xl mb-4", "📋" }
                h3 { class: "text-xl font-semibold mb-2", "No Bookings Found" }
                p { class: "text-gray-600", "{current_filter.empty_message()}" }
            }
        } else {
            div { class: "grid gap-4",
                for booking in shown {
                    {
                        let booking_id = booking.id;
                        rsx! {
                            BookingCard {
                                key: "{booking_id}",
                                booking,
                                show_customer: true,
                                actions: admin_actions(booking_id),
                                on_action: move |op| run_pending(op, toast),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_actions_never_map_to_a_live_request() {
        let actions = admin_actions(7);
        assert_eq!(actions.len(), 3);
        assert!(actions.iter().all(|a| a.operation.booking_id() == 7));
        assert!(actions
            .iter()
            .all(|a| a.operation.notice().ends_with("coming soon!")));
        let delete = actions.iter().find(|a| a.label == "Delete").unwrap();
        assert!(delete.danger);
        assert!(delete.operation.confirmation_prompt().is_some());
    }
}
