//! Site header: brand, main links and the session controls.

use dioxus::prelude::*;

use crate::app::state::use_app_state;
use crate::app::Route;

const LINK_CLASS: &str = "text-gray-700 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium";

/// Navigation bar. Shows a greeting and Logout when signed in, otherwise
/// Login and Admin links.
#[component]
pub fn Nav() -> Element {
    let state = use_app_state();
    let auth = state.auth();
    let current = auth.current();

    let on_logout = move |_| {
        let Some(session) = state.auth().current() else {
            return;
        };
        spawn(async move {
            state.logout(session.role).await;
            navigator().push(Route::Home {});
        });
    };

    rsx! {
        header { class: "bg-white shadow-sm border-b",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex justify-between items-center h-16",
                    Link { to: Route::Home {}, class: "text-2xl font-bold text-gray-900", "BookMeHere" }

                    nav { class: "hidden md:flex space-x-8",
                        Link { to: Route::Home {}, class: LINK_CLASS, "Home" }
                        Link { to: Route::Services {}, class: LINK_CLASS, "Services" }
                        Link { to: Route::Book {}, class: LINK_CLASS, "Book Now" }
                    }

                    div { class: "flex items-center space-x-4",
                        if let Some(session) = current {
                            span { class: "text-sm text-gray-700", "Welcome, {session.user.display_name()}" }
                            button {
                                class: "bg-red-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-red-700",
                                onclick: on_logout,
                                "Logout"
                            }
                        } else if !auth.loading {
                            Link { to: Route::Login { from: String::new() }, class: LINK_CLASS, "Login" }
                            Link {
                                to: Route::AdminLogin {},
                                class: "bg-blue-600 text-white px-4 py-2 rounded-md text-sm font-medium hover:bg-blue-700",
                                "Admin"
                            }
                        }
                    }
                }
            }
        }
    }
}
