//! Combined login page with a customer/admin toggle.

use std::str::FromStr;

use dioxus::prelude::*;

use crate::app::components::CredentialForm;
use crate::app::state::use_app_state;
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::models::LoginRequest;
use crate::session::SessionRole;

pub(super) const LOGIN_FAILED: &str = "Login failed";

/// Where to go after signing in. A customer returns to the page the guard
/// bounced them from, if it is one of ours; everyone else lands on their dashboard.
pub(super) fn landing_route(role: SessionRole, from: &str) -> Route {
    match role {
        SessionRole::Admin => Route::AdminDashboard {},
        SessionRole::Customer => match Route::from_str(from) {
            Ok(route) if !from.is_empty() && !matches!(route, Route::NotFound { .. }) => route,
            _ => Route::UserDashboard {},
        },
    }
}

/// Submit handler shared by both login pages
pub(super) fn use_sign_in(role: Signal<SessionRole>, from: String) -> (Signal<bool>, Callback<LoginRequest>) {
    let state = use_app_state();
    let toast = use_toast();
    let nav = navigator();
    let mut busy = use_signal(|| false);

    let submit = use_callback(move |credentials: LoginRequest| {
        if busy() {
            return;
        }
        let role = role();
        let from = from.clone();
        busy.set(true);
        spawn(async move {
            let result = state.login(role, credentials).await;
            busy.set(false);
            match result {
                Ok(_) => {
                    toast.success("Login successful!");
                    nav.push(landing_route(role, &from));
                }
                Err(e) => {
                    tracing::warn!("{} login failed: {}", role.as_str(), e);
                    toast.error(e.user_message(LOGIN_FAILED));
                }
            }
        });
    });

    (busy, submit)
}

#[component]
pub fn Login(from: String) -> Element {
    let mut role = use_signal(|| SessionRole::Customer);
    let (busy, submit) = use_sign_in(role, from);

    let (title, subtitle, demo) = match role() {
        SessionRole::Customer => (
            "User Login",
            "Access your bookings and manage your appointments",
            ("user", "user123"),
        ),
        SessionRole::Admin => (
            "Admin Login",
            "Access the admin dashboard",
            ("admin", "admin123"),
        ),
    };
    let tab = |active: bool| {
        if active {
            "flex-1 py-2 rounded-md text-sm font-medium bg-white shadow"
        } else {
            "flex-1 py-2 rounded-md text-sm font-medium text-gray-600"
        }
    };

    rsx! {
        document::Title { "Login - BookMeHere" }

        div { class: "min-h-[60vh] flex items-center justify-center",
            div { class: "bg-white rounded-xl border p-8 w-full max-w-md",
                div { class: "text-center mb-6",
                    h1 { class: "text-2xl font-bold mb-1", "{title}" }
                    p { class: "text-gray-600", "{subtitle}" }
                }

                div { class: "flex gap-2 bg-gray-100 rounded-lg p-1 mb-6",
                    button {
                        r#type: "button",
                        class: tab(role() == SessionRole::Customer),
                        onclick: move |_| role.set(SessionRole::Customer),
                        "Customer"
                    }
                    button {
                        r#type: "button",
                        class: tab(role() == SessionRole::Admin),
                        onclick: move |_| role.set(SessionRole::Admin),
                        "Admin"
                    }
                }

                CredentialForm {
                    submit_label: "Sign In".to_string(),
                    busy: busy(),
                    demo_credentials: demo,
                    on_submit: move |credentials| submit.call(credentials),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_returns_to_guarded_page() {
        assert_eq!(
            landing_route(SessionRole::Customer, "/dashboard"),
            Route::UserDashboard {}
        );
        assert_eq!(
            landing_route(SessionRole::Customer, "/booking/3"),
            Route::BookService { service_id: 3 }
        );
    }

    #[test]
    fn customer_without_origin_lands_on_dashboard() {
        assert_eq!(landing_route(SessionRole::Customer, ""), Route::UserDashboard {});
        assert_eq!(
            landing_route(SessionRole::Customer, "https://elsewhere.example/x"),
            Route::UserDashboard {}
        );
    }

    #[test]
    fn admin_always_lands_on_admin_dashboard() {
        assert_eq!(
            landing_route(SessionRole::Admin, "/dashboard"),
            Route::AdminDashboard {}
        );
    }
}
