use dioxus::prelude::*;

use crate::models::TimeSlot;

/// Slot picker. Busy slots render disabled and never call `on_select`.
#[component]
pub fn TimeSlotGrid(
    slots: Vec<TimeSlot>,
    selected: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "grid grid-cols-3 sm:grid-cols-4 gap-2",
            for slot in slots {
                {
                    let is_selected = selected.as_deref() == Some(slot.time.as_str());
                    let class = match (slot.available, is_selected) {
                        (true, true) => "bg-blue-600 text-white border-blue-600",
                        (true, false) => "bg-white hover:border-blue-600",
                        (false, _) => "bg-gray-100 text-gray-400 line-through cursor-not-allowed",
                    };
                    let time = slot.time.clone();
                    let available = slot.available;
                    rsx! {
                        button {
                            key: "{slot.time}",
                            r#type: "button",
                            class: "border rounded-md py-2 text-sm {class}",
                            disabled: !available,
                            onclick: move |_| {
                                if available {
                                    on_select.call(time.clone());
                                }
                            },
                            "{slot.label()}"
                        }
                    }
                }
            }
        }
    }
}
