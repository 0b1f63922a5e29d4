//! Route guard wrapper.

use dioxus::prelude::*;

use super::layout::Spinner;
use crate::app::state::use_app_state;
use crate::app::Route;
use crate::session::guard::{evaluate, GuardDecision, Requirement};

/// Renders `children` only once the stored session satisfies `requirement`.
/// Until sessions are restored it shows a spinner; afterwards it redirects.
#[component]
pub fn ProtectedRoute(requirement: Requirement, children: Element) -> Element {
    let state = use_app_state();
    let location = use_route::<Route>().to_string();

    let decision = evaluate(requirement, state.auth().snapshot(), &location);

    let target = location.clone();
    use_effect(move || {
        match evaluate(requirement, state.auth().snapshot(), &target) {
            GuardDecision::RedirectToLogin { from } => {
                tracing::debug!("No session for {}, redirecting to login", from);
                navigator().replace(Route::Login { from });
            }
            GuardDecision::RedirectToAdminLogin => {
                tracing::debug!("No admin session for {}, redirecting", target);
                navigator().replace(Route::AdminLogin {});
            }
            GuardDecision::Pending | GuardDecision::Allow => {}
        }
    });

    match decision {
        GuardDecision::Allow => rsx! { {children} },
        _ => rsx! { Spinner {} },
    }
}
