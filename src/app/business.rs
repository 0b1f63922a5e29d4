//! Business settings context (currency and contact details).
//!
//! Every page that prints a price reads the currency symbol from here. The
//! defaults stay in place until `/services/settings` answers, and a failed
//! fetch only gets logged.

use dioxus::prelude::*;

use super::state::use_app_state;
use crate::models::BusinessSettings;

#[derive(Clone, Copy)]
pub struct BusinessContext {
    settings: Signal<BusinessSettings>,
    loaded: Signal<bool>,
}

impl BusinessContext {
    pub fn settings(&self) -> BusinessSettings {
        (self.settings)()
    }

    pub fn currency_symbol(&self) -> String {
        self.settings.read().currency_symbol.clone()
    }

    pub fn is_loaded(&self) -> bool {
        (self.loaded)()
    }
}

/// Initialize business settings - call once at app root, after app state
pub fn use_business_provider() {
    let state = use_app_state();
    let mut settings = use_signal(BusinessSettings::default);
    let mut loaded = use_signal(|| false);

    use_context_provider(|| BusinessContext { settings, loaded });

    use_effect(move || {
        spawn(async move {
            match state.api().service_settings().await {
                Ok(fetched) => {
                    settings.set(fetched);
                    loaded.set(true);
                }
                Err(e) => tracing::warn!("Failed to load business settings: {}", e),
            }
        });
    });
}

pub fn use_business() -> BusinessContext {
    use_context::<BusinessContext>()
}
