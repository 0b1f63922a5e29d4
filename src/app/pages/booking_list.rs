//! Booking list state shared by both dashboards.

use dioxus::prelude::*;

use crate::app::confirm;
use crate::app::state::use_app_state;
use crate::app::toast::{use_toast, ToastContext};
use crate::booking::PendingBackendOperation;
use crate::models::Booking;

pub(super) const LOAD_FAILED: &str = "Failed to load bookings";

#[derive(Clone, Copy)]
pub(super) struct BookingList {
    pub bookings: Signal<Vec<Booking>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    reload: Signal<u32>,
}

impl BookingList {
    pub fn reload(&self) {
        let mut reload = self.reload;
        reload += 1;
    }
}

/// Fetch `GET /bookings` on mount and whenever `reload()` is called
pub(super) fn use_booking_list() -> BookingList {
    let state = use_app_state();
    let toast = use_toast();
    let mut bookings = use_signal(Vec::<Booking>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let reload = use_signal(|| 0u32);

    use_effect(move || {
        let _ = reload();
        loading.set(true);
        spawn(async move {
            match state.api().list_bookings().await {
                Ok(list) => {
                    tracing::debug!("Loaded {} bookings", list.len());
                    bookings.set(list);
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to fetch bookings: {}", e);
                    let message = e.user_message(LOAD_FAILED);
                    toast.error(message.clone());
                    error.set(Some(message));
                }
            }
            loading.set(false);
        });
    });

    BookingList {
        bookings,
        loading,
        error,
        reload,
    }
}

/// Dashboard buttons have no backend yet: ask when the action is
/// destructive, then show the notice. Nothing is sent.
pub(super) fn run_pending(operation: PendingBackendOperation, toast: ToastContext) {
    if let Some(prompt) = operation.confirmation_prompt() {
        if !confirm(prompt) {
            return;
        }
    }
    tracing::info!(
        "Booking {} action requested without backend support: {:?}",
        operation.booking_id(),
        operation
    );
    toast.info(operation.notice());
}
