//! Role-tagged login sessions
//!
//! A session is the user object returned by a login endpoint, stored as JSON
//! under a fixed per-role key. It has no expiry and is removed only by logout
//! (or when the stored value turns out to be unreadable).

pub mod guard;
pub mod store;

use std::rc::Rc;

use thiserror::Error;

use crate::api::{ApiClient, ApiError, LoginKind};
use crate::models::{LoginRequest, SessionUser};
pub use store::{default_store, MemorySessionStore, SessionStore, StoreError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionRole {
    Admin,
    Customer,
}

impl SessionRole {
    pub fn storage_key(&self) -> &'static str {
        match self {
            SessionRole::Admin => "adminSession",
            SessionRole::Customer => "userSession",
        }
    }

    pub fn login_kind(&self) -> LoginKind {
        match self {
            SessionRole::Admin => LoginKind::Admin,
            SessionRole::Customer => LoginKind::Customer,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionRole::Admin => "admin",
            SessionRole::Customer => "customer",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub role: SessionRole,
    pub user: SessionUser,
}

/// Both slots as found in storage at startup
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestoredSessions {
    pub admin: Option<SessionUser>,
    pub customer: Option<SessionUser>,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Please fill in all fields")]
    IncompleteCredentials,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SessionError {
    /// Toast text; `fallback` is used when the server gave no reason
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            SessionError::IncompleteCredentials => self.to_string(),
            SessionError::Api(e) => e.user_message(fallback),
            SessionError::Store(_) => fallback.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct SessionManager {
    store: Rc<dyn SessionStore>,
}

impl PartialEq for SessionManager {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl SessionManager {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Stored user for `role`. Unparseable values are removed and reported as absent.
    pub fn load(&self, role: SessionRole) -> Option<SessionUser> {
        let key = role.storage_key();
        let raw = self.store.get(key)?;
        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable {} ({})", key, e);
                self.store.remove(key);
                None
            }
        }
    }

    pub fn save(&self, role: SessionRole, user: &SessionUser) -> Result<(), StoreError> {
        let json = serde_json::to_string(user).map_err(|e| StoreError::Write(e.to_string()))?;
        self.store.set(role.storage_key(), &json)
    }

    pub fn clear(&self, role: SessionRole) {
        self.store.remove(role.storage_key());
    }

    pub fn restore(&self) -> RestoredSessions {
        RestoredSessions {
            admin: self.load(SessionRole::Admin),
            customer: self.load(SessionRole::Customer),
        }
    }

    /// Validate credentials locally, call the role's login endpoint and persist
    /// the returned user. Incomplete credentials never reach the network.
    pub async fn sign_in(
        &self,
        client: &ApiClient,
        role: SessionRole,
        credentials: &LoginRequest,
    ) -> Result<Session, SessionError> {
        if !credentials.is_complete() {
            return Err(SessionError::IncompleteCredentials);
        }
        let user = client.login(role.login_kind(), credentials).await?;
        self.save(role, &user)?;
        tracing::info!(
            "Signed in as {} ({})",
            user.display_name(),
            role.as_str()
        );
        Ok(Session { role, user })
    }

    /// Tell the backend (best effort) and drop the local session regardless
    pub async fn sign_out(&self, client: &ApiClient, role: SessionRole) {
        if let Err(e) = client.logout().await {
            tracing::warn!("Logout request failed, clearing local session anyway: {}", e);
        }
        self.clear(role);
        tracing::info!("Signed out ({})", role.as_str());
    }
}
