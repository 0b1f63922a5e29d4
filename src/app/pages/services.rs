//! Service catalogue.

use dioxus::prelude::*;

use crate::app::business::use_business;
use crate::app::components::{service_image_url, ErrorAlert, ServiceCard, Spinner};
use crate::app::state::use_app_state;
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::models::Service;

const LOAD_FAILED: &str = "Failed to load services";

/// Lists active services; "Book Now" jumps into the wizard with the service preselected.
#[component]
pub fn Services() -> Element {
    let state = use_app_state();
    let toast = use_toast();
    let business = use_business();
    let nav = navigator();

    let mut services = use_signal(Vec::<Service>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut reload = use_signal(|| 0u32);

    // Re-runs whenever `reload` is bumped
    use_effect(move || {
        let _ = reload();
        loading.set(true);
        spawn(async move {
            match state.api().list_services().await {
                Ok(list) => {
                    services.set(list);
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("Failed to fetch services: {}", e);
                    let message = e.user_message(LOAD_FAILED);
                    toast.error(message.clone());
                    error.set(Some(message));
                }
            }
            loading.set(false);
        });
    });

    let symbol = business.currency_symbol();
    let api = state.api();

    rsx! {
        document::Title { "Services - BookMeHere" }

        div { class: "text-center mb-10",
            h1 { class: "text-3xl font-bold mb-2", "Our Services" }
            p { class: "text-gray-600", "Professional services tailored to your needs" }
        }

        if loading() {
            Spinner { label: "Loading services...".to_string() }
        } else if let Some(message) = error() {
            ErrorAlert {
                message,
                on_retry: move |_| reload += 1,
            }
        } else if services.read().is_empty() {
            div { class: "text-center py-16",
                h3 { class: "text-xl font-semibold mb-2", "No services available" }
                p { class: "text-gray-600", "Please check back later or contact us for more information." }
            }
        } else {
            div { class: "grid sm:grid-cols-2 lg:grid-cols-3 gap-6",
                for service in services.read().iter().filter(|s| s.is_active).cloned() {
                    {
                        let id = service.id;
                        let image_url = service_image_url(&api, &service);
                        let service = describe(service);
                        rsx! {
                            ServiceCard {
                                key: "{id}",
                                service,
                                image_url,
                                currency_symbol: symbol.clone(),
                                action_label: "Book Now",
                                on_select: move |_| {
                                    nav.push(Route::BookService { service_id: id });
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

fn describe(mut service: Service) -> Service {
    if service.description.trim().is_empty() {
        service.description = "Professional service tailored to your needs".to_string();
    }
    service
}
