use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Footer() -> Element {
    let version = env!("BOOKME_VERSION");
    let git_sha = env!("BOOKME_GIT_SHA");

    rsx! {
        footer { class: "bg-gray-900 text-gray-300 mt-12",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10 grid gap-8 md:grid-cols-3",
                div {
                    h3 { class: "text-white font-semibold mb-3", "BookMeHere" }
                    p { "Your trusted booking platform for professional services." }
                    p { "Book appointments with expert masters in just a few clicks." }
                }
                div {
                    h3 { class: "text-white font-semibold mb-3", "Quick Links" }
                    ul { class: "space-y-1",
                        li { Link { to: Route::Home {}, class: "hover:text-white", "Home" } }
                        li { Link { to: Route::Services {}, class: "hover:text-white", "Services" } }
                        li { Link { to: Route::Book {}, class: "hover:text-white", "Book Now" } }
                        li { Link { to: Route::AdminLogin {}, class: "hover:text-white", "Admin Panel" } }
                    }
                }
                div {
                    h3 { class: "text-white font-semibold mb-3", "Contact" }
                    p { "Need help? Contact us anytime." }
                    p { "We're here to make your booking experience seamless." }
                }
            }
            div { class: "border-t border-gray-800 text-center py-4 text-sm",
                p { "© 2024 BookMeHere. All rights reserved." }
                small { class: "text-gray-500", "v{version} ({git_sha})" }
            }
        }
    }
}
