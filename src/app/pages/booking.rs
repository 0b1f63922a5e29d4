//! Booking wizard page.
//!
//! The wizard itself lives in [`crate::booking::BookingWizard`]; this page
//! keeps it in a signal, renders the current step and runs the fetches the
//! wizard asks for.

use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::app::business::use_business;
use crate::app::components::{
    service_image_url, BookingSummary, MasterCard, MobileSummary, SelectField, ServiceCard,
    Spinner, TextAreaField, TextField, TimeSlotGrid,
};
use crate::app::state::use_app_state;
use crate::app::timer::sleep_ms;
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::booking::{BookingWizard, Effect, CONFIRMATION_REDIRECT_MS, DATE_FORMAT};
use crate::models::{ContactPreference, ServiceId};

/// `/booking`
#[component]
pub fn Book() -> Element {
    rsx! {
        BookingPage { preselect: None }
    }
}

/// `/booking/:service_id`, entered from the catalogue
#[component]
pub fn BookService(service_id: ServiceId) -> Element {
    rsx! {
        BookingPage { key: "{service_id}", preselect: Some(service_id) }
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[component]
fn StepHeading(number: u8, title: &'static str) -> Element {
    rsx! {
        h2 { class: "flex items-center gap-3 text-xl font-semibold mb-4",
            span { class: "flex items-center justify-center w-8 h-8 rounded-full bg-blue-600 text-white text-sm",
                "{number}"
            }
            "{title}"
        }
    }
}

#[component]
fn BookingPage(preselect: Option<ServiceId>) -> Element {
    let state = use_app_state();
    let toast = use_toast();
    let business = use_business();
    let nav = navigator();

    let mut wizard = use_signal(move || BookingWizard::new(preselect));
    let mut loading_services = use_signal(|| true);
    let mut loading_masters = use_signal(|| false);
    let mut loading_slots = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    // Performs whatever fetch a transition asked for. Answers that no longer
    // match the selection are dropped by the wizard.
    let mut run = move |effect: Effect| {
        let api = state.api();
        match effect {
            Effect::FetchMasters(service_id) => {
                loading_masters.set(true);
                spawn(async move {
                    let masters = match api.masters_for_service(service_id).await {
                        Ok(masters) => masters,
                        Err(e) => {
                            tracing::error!("Failed to fetch masters: {}", e);
                            toast.error(e.user_message("Failed to load masters"));
                            Vec::new()
                        }
                    };
                    let applied = wizard.write().apply_masters(service_id, masters);
                    if applied {
                        loading_masters.set(false);
                    }
                });
            }
            Effect::FetchSlots { master_id, date } => {
                loading_slots.set(true);
                spawn(async move {
                    let slots = match api.master_availability(master_id, date).await {
                        Ok(slots) => slots,
                        Err(e) => {
                            tracing::error!("Failed to fetch availability: {}", e);
                            toast.error(e.user_message("Failed to load time slots"));
                            Vec::new()
                        }
                    };
                    let applied = wizard.write().apply_slots(master_id, date, slots);
                    if applied {
                        loading_slots.set(false);
                    }
                });
            }
        }
    };

    use_effect(move || {
        spawn(async move {
            match state.api().list_services().await {
                Ok(services) => {
                    let effect = wizard.write().apply_services(services);
                    if let Some(effect) = effect {
                        run(effect);
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to fetch services: {}", e);
                    toast.error(e.user_message("Failed to load services"));
                }
            }
            loading_services.set(false);
        });
    });

    let mut on_service = move |service_id: ServiceId| {
        let result = wizard.write().select_service(service_id);
        match result {
            Ok(effect) => {
                loading_slots.set(false);
                run(effect);
            }
            Err(e) => tracing::warn!("Service selection rejected: {}", e),
        }
    };

    let mut on_master = move |master_id| {
        let result = wizard.write().select_master(master_id);
        if let Err(e) = result {
            tracing::warn!("Master selection rejected: {}", e);
        }
        loading_slots.set(false);
    };

    let on_date = move |e: FormEvent| {
        let value = e.value();
        if value.trim().is_empty() {
            wizard.write().clear_date();
            loading_slots.set(false);
            return;
        }
        let Ok(date) = NaiveDate::parse_from_str(&value, DATE_FORMAT) else {
            return;
        };
        let result = wizard.write().select_date(date, today());
        match result {
            Ok(effect) => run(effect),
            Err(e) => toast.error(e.to_string()),
        }
    };

    let on_time = move |time: String| {
        let result = wizard.write().select_time(&time);
        if let Err(e) = result {
            tracing::debug!("Time selection ignored: {}", e);
        }
    };

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if submitting() {
            return;
        }
        let (payload, confirmation) = {
            let w = wizard.read();
            (w.submission(), w.confirmation())
        };
        let payload = match payload {
            Ok(payload) => payload,
            Err(err) => {
                toast.error(err.to_string());
                return;
            }
        };

        submitting.set(true);
        spawn(async move {
            let result = state.api().create_booking(&payload).await;
            match result {
                Ok(created) => {
                    tracing::info!(
                        "Booking created: {:?}",
                        created.as_ref().map(|b| b.id)
                    );
                    toast.success("Booking confirmed! 🎉");
                    if let Some(confirmation) = confirmation {
                        state.hand_off(confirmation);
                    }
                    sleep_ms(CONFIRMATION_REDIRECT_MS).await;
                    submitting.set(false);
                    nav.push(Route::ThankYou {});
                }
                Err(e) => {
                    tracing::error!("Failed to create booking: {}", e);
                    toast.error(e.user_message("Failed to create booking"));
                    submitting.set(false);
                }
            }
        });
    };

    let w = wizard.read().clone();
    let api = state.api();
    let symbol = business.currency_symbol();
    let selection = w.selection().clone();
    let selected_service = selection.service().cloned();
    let selected_master = selection.master().cloned();
    let selected_date = selection.date().map(|d| d.format(DATE_FORMAT).to_string());
    let selected_time = selection.time().map(str::to_string);
    let min_date = BookingWizard::min_date(today());
    let customer = w.customer().clone();
    let contact_options: Vec<(&'static str, &'static str)> = ContactPreference::ALL
        .iter()
        .map(|p| (p.as_str(), p.label()))
        .collect();

    let summary_service_image = selected_service
        .as_ref()
        .and_then(|s| service_image_url(&api, s));
    let summary_master_image = selected_master
        .as_ref()
        .and_then(|m| m.image_path.as_deref())
        .map(|p| api.media_url(p));

    rsx! {
        document::Title { "Book - BookMeHere" }

        h1 { class: "text-3xl font-bold text-center mb-8", "Book Your Appointment" }

        div { class: "grid lg:grid-cols-3 gap-8 pb-20 lg:pb-0",
            div { class: "lg:col-span-2 space-y-8",

                // Step 1
                section { class: "bg-white rounded-xl border p-6",
                    StepHeading { number: 1, title: "Choose Your Service" }
                    if loading_services() {
                        Spinner { label: "Loading services...".to_string() }
                    } else {
                        div { class: "grid sm:grid-cols-2 gap-4",
                            for service in w.services().iter().filter(|s| s.is_active).cloned() {
                                {
                                    let id = service.id;
                                    let image_url = service_image_url(&api, &service);
                                    let selected = selected_service.as_ref().map(|s| s.id) == Some(id);
                                    rsx! {
                                        ServiceCard {
                                            key: "{id}",
                                            service,
                                            image_url,
                                            currency_symbol: symbol.clone(),
                                            selected,
                                            on_select: move |_| on_service(id),
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                // Step 2
                if selected_service.is_some() {
                    section { class: "bg-white rounded-xl border p-6",
                        StepHeading { number: 2, title: "Choose Your Master" }
                        if loading_masters() {
                            Spinner { label: "Loading masters...".to_string() }
                        } else if w.masters().is_empty() {
                            p { class: "text-gray-500 text-center py-6", "No masters available for this service" }
                        } else {
                            div { class: "grid sm:grid-cols-2 md:grid-cols-3 gap-4",
                                for master in w.masters().iter().cloned() {
                                    {
                                        let id = master.id;
                                        let image_url = master.image_path.as_deref().map(|p| api.media_url(p));
                                        let chosen = selected_master.as_ref().map(|m| m.id);
                                        rsx! {
                                            MasterCard {
                                                key: "{id}",
                                                master,
                                                image_url,
                                                selected: chosen == Some(id),
                                                dimmed: chosen.is_some() && chosen != Some(id),
                                                on_select: move |_| on_master(id),
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                // Step 3
                if selected_master.is_some() {
                    section { class: "bg-white rounded-xl border p-6",
                        StepHeading { number: 3, title: "Select Date & Time" }
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Choose Date:" }
                        input {
                            class: "rounded-md border border-gray-300 px-3 py-2 mb-6",
                            r#type: "date",
                            min: "{min_date}",
                            value: selected_date.clone().unwrap_or_default(),
                            oninput: on_date,
                        }
                        if selected_date.is_some() {
                            h4 { class: "text-sm font-medium text-gray-700 mb-2", "Available Times:" }
                            if loading_slots() {
                                Spinner { label: "Loading time slots...".to_string() }
                            } else if w.slots().is_empty() {
                                p { class: "text-gray-500 text-center py-6", "No available time slots for this date" }
                            } else {
                                TimeSlotGrid {
                                    slots: w.slots().to_vec(),
                                    selected: selected_time.clone(),
                                    on_select: on_time,
                                }
                            }
                        }
                    }
                }

                // Step 4
                if selected_time.is_some() {
                    section { class: "bg-white rounded-xl border p-6",
                        StepHeading { number: 4, title: "Your Contact Information" }
                        form { onsubmit: on_submit,
                            div { class: "grid sm:grid-cols-2 gap-x-4",
                                TextField {
                                    label: "Full Name",
                                    value: customer.name.clone(),
                                    placeholder: "Enter your full name",
                                    required: true,
                                    on_input: move |v| wizard.write().customer_mut().name = v,
                                }
                                TextField {
                                    label: "Email Address",
                                    kind: "email",
                                    value: customer.email.clone(),
                                    placeholder: "Enter your email",
                                    required: true,
                                    on_input: move |v| wizard.write().customer_mut().email = v,
                                }
                                TextField {
                                    label: "Phone Number",
                                    kind: "tel",
                                    value: customer.phone.clone(),
                                    placeholder: "Enter your phone number",
                                    required: true,
                                    on_input: move |v| wizard.write().customer_mut().phone = v,
                                }
                                SelectField {
                                    label: "Preferred Contact Method",
                                    options: contact_options,
                                    selected: customer.contact_preference.as_str().to_string(),
                                    required: true,
                                    on_change: move |v: String| {
                                        if let Some(pref) = ContactPreference::parse(&v) {
                                            wizard.write().customer_mut().contact_preference = pref;
                                        }
                                    },
                                }
                            }
                            TextAreaField {
                                label: "Additional Notes",
                                value: customer.notes.clone(),
                                placeholder: "Any special requests or notes...",
                                on_input: move |v| wizard.write().customer_mut().notes = v,
                            }
                            button {
                                r#type: "submit",
                                class: "w-full bg-green-600 text-white rounded-md py-3 font-semibold hover:bg-green-700 disabled:opacity-50",
                                disabled: submitting(),
                                if submitting() { "Processing..." } else { "Confirm Booking 🎉" }
                            }
                        }
                    }
                }
            }

            aside { class: "hidden lg:block",
                BookingSummary {
                    service: selected_service.clone(),
                    master: selected_master.clone(),
                    date: selected_date.clone(),
                    time: selected_time.clone(),
                    currency_symbol: symbol.clone(),
                    service_image: summary_service_image,
                    master_image: summary_master_image,
                }
            }
        }

        MobileSummary {
            service: selected_service,
            master: selected_master,
            date: selected_date,
            time: selected_time,
            currency_symbol: symbol,
        }
    }
}
