//! Application state shared by every page.
//!
//! Created once by `App`, handed down through context. Holds the API client,
//! the session manager, the reactive auth view and the one-shot confirmation
//! hand-off between the booking wizard and the thank-you page.

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::models::{ConfirmedBooking, LoginRequest, SessionUser};
use crate::session::guard::AuthSnapshot;
use crate::session::{default_store, Session, SessionError, SessionManager, SessionRole};

/// Who is signed in, as far as this browser knows
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    /// True until stored sessions have been read (client side only)
    pub loading: bool,
    pub admin: Option<SessionUser>,
    pub customer: Option<SessionUser>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            loading: true,
            admin: None,
            customer: None,
        }
    }
}

impl AuthState {
    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            loading: self.loading,
            has_admin: self.admin.is_some(),
            has_customer: self.customer.is_some(),
        }
    }

    /// Session shown in the header; admin wins when both exist
    pub fn current(&self) -> Option<Session> {
        if let Some(user) = &self.admin {
            return Some(Session {
                role: SessionRole::Admin,
                user: user.clone(),
            });
        }
        self.customer.as_ref().map(|user| Session {
            role: SessionRole::Customer,
            user: user.clone(),
        })
    }

    fn slot_mut(&mut self, role: SessionRole) -> &mut Option<SessionUser> {
        match role {
            SessionRole::Admin => &mut self.admin,
            SessionRole::Customer => &mut self.customer,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    api: Signal<ApiClient>,
    sessions: Signal<SessionManager>,
    auth: Signal<AuthState>,
    confirmation: Signal<Option<ConfirmedBooking>>,
}

impl AppState {
    pub fn api(&self) -> ApiClient {
        self.api.peek().clone()
    }

    /// Reactive read; subscribes the caller
    pub fn auth(&self) -> AuthState {
        (self.auth)()
    }

    /// Sign in and publish the new session. Failures leave state untouched.
    pub async fn login(
        &self,
        role: SessionRole,
        credentials: LoginRequest,
    ) -> Result<Session, SessionError> {
        let client = self.api();
        let sessions = self.sessions.peek().clone();
        let session = sessions.sign_in(&client, role, &credentials).await?;

        let mut auth = self.auth;
        *auth.write().slot_mut(role) = Some(session.user.clone());
        Ok(session)
    }

    pub async fn logout(&self, role: SessionRole) {
        let client = self.api();
        let sessions = self.sessions.peek().clone();
        sessions.sign_out(&client, role).await;

        let mut auth = self.auth;
        *auth.write().slot_mut(role) = None;
    }

    /// Leave the confirmed booking for the thank-you page
    pub fn hand_off(&self, booking: ConfirmedBooking) {
        let mut confirmation = self.confirmation;
        confirmation.set(Some(booking));
    }

    /// Consume the hand-off. A second call (refresh, revisit) gets `None`.
    pub fn take_confirmation(&self) -> Option<ConfirmedBooking> {
        let mut confirmation = self.confirmation;
        let taken = confirmation.write().take();
        taken
    }
}

/// Initialize app state - call once at app root
pub fn use_app_state_provider() -> AppState {
    let api = use_signal(|| ApiClient::new(ClientConfig::from_build_env()));
    let sessions = use_signal(|| SessionManager::new(default_store()));
    let auth = use_signal(AuthState::default);
    let confirmation = use_signal(|| None);

    let state = AppState {
        api,
        sessions,
        auth,
        confirmation,
    };
    use_context_provider(|| state);

    // Effects only run after hydration, so storage is never read during SSR
    use_effect(move || {
        let restored = sessions.peek().restore();
        tracing::debug!(
            "Restored sessions: admin={} customer={}",
            restored.admin.is_some(),
            restored.customer.is_some()
        );
        let mut auth = auth;
        auth.set(AuthState {
            loading: false,
            admin: restored.admin,
            customer: restored.customer,
        });
    });

    use_drop(move || {
        tracing::debug!("Application state dropped");
    });

    state
}

/// Get app state - use in any component
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
