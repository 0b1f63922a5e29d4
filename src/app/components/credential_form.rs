//! Username/password form shared by the login pages.

use dioxus::prelude::*;

use super::form_inputs::TextField;
use crate::models::LoginRequest;

#[component]
pub fn CredentialForm(
    /// Submit button text
    submit_label: String,
    /// Disables the button and shows a busy label
    busy: bool,
    /// `(username, password)` hint shown under the form
    #[props(default)]
    demo_credentials: Option<(&'static str, &'static str)>,
    on_submit: EventHandler<LoginRequest>,
) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        form {
            onsubmit: move |e| {
                e.prevent_default();
                on_submit.call(LoginRequest {
                    username: username(),
                    password: password(),
                });
            },
            TextField {
                label: "Username",
                value: username(),
                placeholder: "Enter your username",
                required: true,
                on_input: move |v| username.set(v),
            }
            TextField {
                label: "Password",
                kind: "password",
                value: password(),
                placeholder: "Enter your password",
                required: true,
                on_input: move |v| password.set(v),
            }
            button {
                r#type: "submit",
                class: "w-full bg-blue-600 text-white rounded-md py-2 font-medium hover:bg-blue-700 disabled:opacity-50",
                disabled: busy,
                if busy { "Signing in..." } else { "{submit_label}" }
            }
        }
        if let Some((user, pass)) = demo_credentials {
            div { class: "mt-6 rounded-lg bg-gray-50 border p-3 text-sm text-gray-600",
                p { class: "font-medium mb-1", "Demo Credentials:" }
                p { "Username: " code { "{user}" } }
                p { "Password: " code { "{pass}" } }
            }
        }
    }
}
