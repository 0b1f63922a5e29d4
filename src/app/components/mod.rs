//! Shared UI components.

pub mod booking_card;
pub mod booking_summary;
pub mod credential_form;
pub mod error_alert;
pub mod footer;
pub mod form_inputs;
pub mod layout;
pub mod master_card;
pub mod nav;
pub mod protected_route;
pub mod service_card;
pub mod time_slots;

pub use booking_card::{BookingAction, BookingCard};
pub use booking_summary::{BookingSummary, MobileSummary};
pub use credential_form::CredentialForm;
pub use error_alert::ErrorAlert;
pub use footer::Footer;
pub use form_inputs::{SelectField, TextAreaField, TextField};
pub use layout::{Shell, Spinner};
pub use master_card::MasterCard;
pub use nav::Nav;
pub use protected_route::ProtectedRoute;
pub use service_card::{service_image_url, ServiceCard};
pub use time_slots::TimeSlotGrid;
