use dioxus::prelude::*;

use super::login::use_sign_in;
use crate::app::components::CredentialForm;
use crate::session::SessionRole;

/// Dedicated admin sign-in at `/admin`
#[component]
pub fn AdminLogin() -> Element {
    let role = use_signal(|| SessionRole::Admin);
    let (busy, submit) = use_sign_in(role, String::new());

    rsx! {
        document::Title { "Admin Login - BookMeHere" }

        div { class: "min-h-[60vh] flex items-center justify-center",
            div { class: "bg-white rounded-xl border p-8 w-full max-w-md",
                div { class: "text-center mb-6",
                    h1 { class: "text-2xl font-bold mb-1", "Admin Login" }
                    p { class: "text-gray-600", "Access the admin dashboard" }
                }
                CredentialForm {
                    submit_label: "Login".to_string(),
                    busy: busy(),
                    demo_credentials: ("admin", "admin123"),
                    on_submit: move |credentials| submit.call(credentials),
                }
            }
        }
    }
}
