//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod business;
pub mod components;
pub mod pages;
pub mod state;
pub mod timer;
pub mod toast;

use business::use_business_provider;
use components::Shell;
use pages::{
    AdminDashboard, AdminLogin, Book, BookService, Home, Login, NotFound, Services, ThankYou,
    UserDashboard,
};
use state::use_app_state_provider;
use toast::use_toast_provider;

use crate::models::ServiceId;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    use_toast_provider();

    // Sessions are restored from storage once hydrated
    use_app_state_provider();

    // Currency symbol and business name shared by every page
    use_business_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/book", || Route::Book {})]
    #[redirect("/admin/login", || Route::AdminLogin {})]
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/services")]
        Services {},
        #[route("/booking")]
        Book {},
        #[route("/booking/:service_id")]
        BookService { service_id: ServiceId },
        #[route("/thank-you")]
        ThankYou {},
        #[route("/login?:from")]
        Login { from: String },
        #[route("/admin")]
        AdminLogin {},
        #[route("/dashboard")]
        UserDashboard {},
        #[route("/admin-dashboard")]
        AdminDashboard {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Browser confirm dialog. Outside the browser there is nobody to ask.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("confirm() outside the browser: {}", message);
        true
    }
}
