//! Per-tab auth state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` context by the app shell. The login
//! page drives the transitions; the sidebar reads the user for its header and
//! resets the state on logout.
//!
//! DESIGN
//! ======
//! `Anonymous -> Authenticating -> Authenticated -> Anonymous`. The landing
//! route is resolved once, on entry to `Authenticated`, and kept until sign
//! out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Session, User};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Anonymous,
    /// A credential exchange is pending; submission is disabled.
    Authenticating,
    Authenticated,
}

/// Authentication state tracking the current user and the last failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub user: Option<User>,
    pub landing_route: Option<&'static str>,
    pub error: Option<String>,
}

impl AuthState {
    /// State for a page load that found `session` already in storage.
    #[must_use]
    pub fn from_session(session: Option<&Session>) -> Self {
        let mut state = Self::default();
        if let Some(session) = session {
            state.succeed(session.user.clone());
        }
        state
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase == AuthPhase::Authenticating
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    /// Enter `Authenticating`. Returns `false`, changing nothing, if an
    /// attempt is already pending.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = AuthPhase::Authenticating;
        self.error = None;
        true
    }

    /// Enter `Authenticated` with `user` and return the landing route.
    ///
    /// Repeated calls while authenticated keep the route resolved on entry.
    pub fn succeed(&mut self, user: User) -> &'static str {
        if let (AuthPhase::Authenticated, Some(route)) = (self.phase, self.landing_route) {
            self.user = Some(user);
            return route;
        }
        let route = user.role.landing_route();
        self.phase = AuthPhase::Authenticated;
        self.user = Some(user);
        self.landing_route = Some(route);
        self.error = None;
        route
    }

    /// Back to `Anonymous` with `message` surfaced.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self { error: Some(message.into()), ..Self::default() };
    }

    pub fn sign_out(&mut self) {
        *self = Self::default();
    }
}
