//! Route-level page components.
//!
//! Pages fetch their data from effects, so nothing here talks to the
//! backend during server-side rendering.

mod admin_dashboard;
mod admin_login;
mod booking;
mod booking_list;
mod home;
mod login;
mod not_found;
mod services;
mod thank_you;
mod user_dashboard;

pub use admin_dashboard::AdminDashboard;
pub use admin_login::AdminLogin;
pub use booking::{Book, BookService};
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use services::Services;
pub use thank_you::ThankYou;
pub use user_dashboard::UserDashboard;
