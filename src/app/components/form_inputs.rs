//! Reusable form input components.

use dioxus::prelude::*;

const INPUT_CLASS: &str = "w-full rounded-md border border-gray-300 px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500";

/// A labeled single-line input.
#[component]
pub fn TextField(
    /// Input label
    label: &'static str,
    /// HTML input type (`text`, `email`, `tel`, `password`)
    #[props(default = "text")]
    kind: &'static str,
    /// Current value
    value: String,
    #[props(default)]
    placeholder: &'static str,
    #[props(default = false)]
    required: bool,
    /// Called with the new value on every keystroke
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "mb-4",
            label { class: "block text-sm font-medium text-gray-700 mb-1",
                "{label}"
                if required {
                    " *"
                }
            }
            input {
                class: INPUT_CLASS,
                r#type: kind,
                value: "{value}",
                placeholder: placeholder,
                required: required,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// A labeled multi-line input.
#[component]
pub fn TextAreaField(
    label: &'static str,
    value: String,
    #[props(default)]
    placeholder: &'static str,
    #[props(default = 3)]
    rows: u32,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "mb-4",
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{label}" }
            textarea {
                class: INPUT_CLASS,
                rows: "{rows}",
                placeholder: placeholder,
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// A labeled dropdown over `(value, label)` pairs.
#[component]
pub fn SelectField(
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    selected: String,
    #[props(default = false)]
    required: bool,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "mb-4",
            label { class: "block text-sm font-medium text-gray-700 mb-1",
                "{label}"
                if required {
                    " *"
                }
            }
            select {
                class: INPUT_CLASS,
                required: required,
                onchange: move |e| on_change.call(e.value()),
                for (value, text) in options {
                    option {
                        key: "{value}",
                        value: value,
                        selected: selected == value,
                        "{text}"
                    }
                }
            }
        }
    }
}
