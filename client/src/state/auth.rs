//! Auth-session state for the signed-in organizer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and identity-aware components to coordinate login
//! redirects. Provided as an `RwSignal<AuthState>` context by the app root.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Organizer;

/// Authentication state tracking the current organizer and whether the
/// initial `/api/auth/me` probe is still in flight.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub organizer: Option<Organizer>,
    pub loading: bool,
}

impl AuthState {
    /// State for a probe that has started but not resolved. Route guards
    /// hold off redirecting while this is set.
    #[must_use]
    pub fn probing() -> Self {
        Self {
            organizer: None,
            loading: true,
        }
    }

    /// State after the probe resolved.
    #[must_use]
    pub fn resolved(organizer: Option<Organizer>) -> Self {
        Self {
            organizer,
            loading: false,
        }
    }
}
