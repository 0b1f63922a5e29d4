//! Route guard decision
//!
//! A UX redirect only. The backend is the authority on who may see what.

/// What a protected subtree asks for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Requirement {
    pub require_auth: bool,
    pub require_admin: bool,
}

impl Requirement {
    pub const AUTH: Requirement = Requirement {
        require_auth: true,
        require_admin: false,
    };
    pub const ADMIN: Requirement = Requirement {
        require_auth: false,
        require_admin: true,
    };
}

/// Session state as the guard sees it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    /// Stored sessions not yet read
    pub loading: bool,
    pub has_admin: bool,
    pub has_customer: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show a spinner and decide later
    Pending,
    RedirectToLogin { from: String },
    RedirectToAdminLogin,
    Allow,
}

pub fn evaluate(requirement: Requirement, auth: AuthSnapshot, location: &str) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Pending;
    }
    if requirement.require_auth && !(auth.has_customer || auth.has_admin) {
        return GuardDecision::RedirectToLogin {
            from: location.to_string(),
        };
    }
    if requirement.require_admin && !auth.has_admin {
        return GuardDecision::RedirectToAdminLogin;
    }
    GuardDecision::Allow
}
