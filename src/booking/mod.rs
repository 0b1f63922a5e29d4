//! Booking flow

pub mod manage;
pub mod wizard;

pub use manage::{scope_to_customer, BookingFilter, BookingStats, PendingBackendOperation};
pub use wizard::{BookingWizard, Effect, Selection, WizardError};

/// Wire format for booking dates (`2025-06-01`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Delay between the success toast and the move to the confirmation page
pub const CONFIRMATION_REDIRECT_MS: u32 = 2000;
