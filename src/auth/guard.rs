//! Session guard: credential acquisition, persistence, and route gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login screens call the two `authenticate_*` operations; protected views
//! call [`SessionGuard::guard_protected_access`] on every render; the shell
//! calls [`SessionGuard::logout`]. All storage reads go straight to the
//! injected [`SessionStore`], so a session cleared by another tab is noticed
//! at the next protected navigation.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded. Each guard admits one credential exchange at a time; a
//! second attempt while one is pending is refused without touching the
//! network. Nothing here imposes a timeout.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::cell::Cell;

use time::OffsetDateTime;

use super::error::{
    IN_FLIGHT_MESSAGE, LOGIN_FALLBACK_MESSAGE, PERSIST_FAILURE_MESSAGE, SessionError, WALLET_LOGIN_FALLBACK_MESSAGE,
};
use super::store::{Scope, SessionStore};
use super::wallet::{WalletSigner, challenge_message};
use crate::config::ClientConfig;
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{PasswordLogin, Session, WalletLogin};
use crate::util::validate::login_errors;

/// Outcome of gating a protected view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectTo(String),
}

/// Mediates between login flows, session storage, and protected routes.
pub struct SessionGuard<S, A> {
    store: S,
    api: A,
    login_route: String,
    clock: fn() -> OffsetDateTime,
    in_flight: Cell<bool>,
}

/// Clears the in-flight flag when an attempt settles, however it settles.
struct Flight<'a>(&'a Cell<bool>);

impl Drop for Flight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<S: SessionStore, A: AuthApi> SessionGuard<S, A> {
    pub fn new(store: S, api: A, config: &ClientConfig) -> Self {
        Self {
            store,
            api,
            login_route: config.login_route.clone(),
            clock: OffsetDateTime::now_utc,
            in_flight: Cell::new(false),
        }
    }

    /// Replace the wall clock used for wallet challenges.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether a credential exchange is pending on this guard.
    #[must_use]
    pub fn is_authenticating(&self) -> bool {
        self.in_flight.get()
    }

    /// Exchange email and password for a session.
    ///
    /// The session lands in the durable scope when `remember_me` is set,
    /// otherwise in the ephemeral one.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Validation`] for a malformed email or empty password;
    ///   no request is sent.
    /// - [`SessionError::Auth`] for a rejected or failed exchange, carrying
    ///   the server message when there is one.
    pub async fn authenticate_with_password(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<Session, SessionError> {
        if let Some(err) = login_errors(email, password).into_iter().next() {
            return Err(err.into());
        }
        let _flight = self.begin()?;

        let body = PasswordLogin { email: email.to_owned(), password: password.to_owned() };
        let session = self
            .api
            .login(&body)
            .await
            .map_err(|e| rejected("password", &e, LOGIN_FALLBACK_MESSAGE))?;

        let scope = if remember_me { Scope::Durable } else { Scope::Ephemeral };
        self.persist(scope, &session)?;
        log::info!("password sign-in succeeded: user_id={} scope={scope:?}", session.user.id);
        Ok(session)
    }

    /// Prove control of a wallet address and exchange the signature for a
    /// session. Wallet sessions are always ephemeral.
    ///
    /// # Errors
    ///
    /// - [`SessionError::WalletUnavailable`] when `signer` is `None`; no
    ///   request is sent.
    /// - [`SessionError::Auth`] when the signer refuses or fails, or the
    ///   server rejects the signature.
    pub async fn authenticate_with_wallet(&self, signer: Option<&dyn WalletSigner>) -> Result<Session, SessionError> {
        let Some(signer) = signer else {
            log::warn!("wallet sign-in attempted without a provider");
            return Err(SessionError::WalletUnavailable);
        };
        let _flight = self.begin()?;

        let address = signer.address().await.inspect_err(|e| log::warn!("wallet address failed: {e}"))?;
        let message = challenge_message(&address, (self.clock)());
        let signature = signer
            .sign(&address, &message)
            .await
            .inspect_err(|e| log::warn!("wallet signature failed: {e}"))?;

        let body = WalletLogin { address, signature, message };
        let session = self
            .api
            .wallet_login(&body)
            .await
            .map_err(|e| rejected("wallet", &e, WALLET_LOGIN_FALLBACK_MESSAGE))?;

        self.persist(Scope::Ephemeral, &session)?;
        log::info!("wallet sign-in succeeded: user_id={}", session.user.id);
        Ok(session)
    }

    /// Durable session first, then ephemeral. Reads only.
    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        Scope::ALL.into_iter().find_map(|scope| self.store.read(scope))
    }

    /// `Allow` iff either scope holds a token; re-reads storage every call.
    #[must_use]
    pub fn guard_protected_access(&self) -> Access {
        protected_access(&self.store, &self.login_route)
    }

    /// Clear both scopes and return the route to send the user to.
    pub fn logout(&self) -> &str {
        for scope in Scope::ALL {
            self.store.clear(scope);
        }
        log::info!("signed out");
        &self.login_route
    }

    fn begin(&self) -> Result<Flight<'_>, SessionError> {
        if self.in_flight.replace(true) {
            log::warn!("sign-in refused: another attempt is pending");
            return Err(SessionError::auth(IN_FLIGHT_MESSAGE));
        }
        Ok(Flight(&self.in_flight))
    }

    /// Replace whatever session exists with `session` in `scope`.
    fn persist(&self, scope: Scope, session: &Session) -> Result<(), SessionError> {
        for other in Scope::ALL {
            self.store.clear(other);
        }
        self.store.write(scope, session).map_err(|e| {
            log::warn!("session persist failed: scope={scope:?} error={e}");
            SessionError::auth(PERSIST_FAILURE_MESSAGE)
        })
    }
}

/// `Allow` iff either scope of `store` holds a token.
pub fn protected_access<S: SessionStore>(store: &S, login_route: &str) -> Access {
    if Scope::ALL.into_iter().any(|scope| store.token(scope).is_some()) {
        Access::Allow
    } else {
        Access::RedirectTo(login_route.to_owned())
    }
}

fn rejected(flow: &str, err: &ApiError, fallback: &str) -> SessionError {
    log::warn!("{flow} sign-in rejected: {err}");
    SessionError::auth(err.user_message(fallback))
}

#[cfg(feature = "csr")]
pub use browser::{BrowserGuard, browser_guard};

#[cfg(feature = "csr")]
mod browser {
    use super::SessionGuard;
    use crate::config::ClientConfig;
    use crate::net::api::HttpApi;
    use crate::util::storage::{BrowserArea, browser_store};

    pub type BrowserGuard = SessionGuard<crate::auth::store::ScopedStore<BrowserArea>, HttpApi>;

    /// Guard over `localStorage`/`sessionStorage` and the HTTP API.
    /// `None` when the page has no storage (e.g. storage disabled).
    pub fn browser_guard(config: &ClientConfig) -> Option<BrowserGuard> {
        Some(SessionGuard::new(browser_store()?, HttpApi::new(config), config))
    }
}
