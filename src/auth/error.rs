//! Session errors surfaced to the login screens.
//!
//! Every failure of a credential-acquisition flow ends up as one of these
//! values; none of them is fatal and all but `WalletUnavailable` can be
//! retried immediately.

use crate::util::validate::ValidationError;

pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please try again.";
pub const WALLET_LOGIN_FALLBACK_MESSAGE: &str = "Wallet sign-in failed. Please try again.";
pub const IN_FLIGHT_MESSAGE: &str = "A sign-in attempt is already in progress.";
pub const PERSIST_FAILURE_MESSAGE: &str = "Signed in, but the session could not be saved in this browser.";
pub const WALLET_UNAVAILABLE_MESSAGE: &str =
    "No wallet provider found. Install or unlock a browser wallet to continue.";

/// Errors produced by [`super::SessionGuard`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Input was rejected locally; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No signing provider exists in this environment.
    #[error("{}", WALLET_UNAVAILABLE_MESSAGE)]
    WalletUnavailable,

    /// The server, the transport, or the signer refused the attempt.
    #[error("{message}")]
    Auth { message: String },
}

impl SessionError {
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth { message: message.into() }
    }

    /// Form field the error belongs to, if it is a validation error.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(err) => Some(err.field),
            _ => None,
        }
    }
}

/// Failures reported by a wallet signer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    /// The user dismissed the connect or signature prompt.
    #[error("Signature request was rejected in the wallet.")]
    Rejected,

    /// The provider answered without any account.
    #[error("The wallet did not share an account.")]
    NoAccount,

    /// Any other provider failure.
    #[error("Wallet error: {0}")]
    Provider(String),
}

impl From<WalletError> for SessionError {
    fn from(err: WalletError) -> Self {
        Self::auth(err.to_string())
    }
}

/// Failures writing to a storage area.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The session could not be serialized.
    #[error("session encode failed: {0}")]
    Encode(String),

    /// The storage area refused the write (quota, privacy mode).
    #[error("storage write failed: {0}")]
    Write(String),
}
