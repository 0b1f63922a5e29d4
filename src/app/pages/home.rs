use dioxus::prelude::*;

use crate::app::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🎯",
        title: "Easy Booking",
        text: "Book appointments in just a few clicks with our intuitive interface.",
    },
    Feature {
        icon: "👨‍💼",
        title: "Expert Masters",
        text: "Choose from our team of professional masters with verified skills.",
    },
    Feature {
        icon: "📱",
        title: "Mobile Friendly",
        text: "Access and book from any device with our responsive design.",
    },
];

/// Landing page: hero with the two entry points and the feature row.
#[component]
pub fn Home() -> Element {
    rsx! {
        document::Title { "BookMeHere" }

        section { class: "text-center py-16",
            h1 { class: "text-4xl md:text-5xl font-bold mb-4", "Welcome to BookMeHere" }
            p { class: "text-xl text-gray-600 mb-8", "Professional booking system for modern businesses" }
            div { class: "flex justify-center gap-4",
                Link {
                    to: Route::Book {},
                    class: "bg-blue-600 text-white px-6 py-3 rounded-md font-medium hover:bg-blue-700",
                    "Book Now"
                }
                Link {
                    to: Route::Services {},
                    class: "border border-gray-300 bg-white px-6 py-3 rounded-md font-medium hover:bg-gray-50",
                    "View Services"
                }
            }
        }

        section { class: "grid md:grid-cols-3 gap-6",
            for feature in FEATURES.iter() {
                div { key: "{feature.title}", class: "bg-white rounded-xl border p-6 text-center",
                    div { class: "text-4xl mb-3", "{feature.icon}" }
                    h3 { class: "text-lg font-semibold mb-2", "{feature.title}" }
                    p { class: "text-gray-600", "{feature.text}" }
                }
            }
        }
    }
}
