//! Session lifecycle for the tracker front end.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` owns sign-in, logout and route gating; `store` persists sessions
//! into a durable or ephemeral scope; `wallet` abstracts the browser wallet
//! that signs sign-in challenges; `route` maps roles to landing routes.
//! Pages reach all of this through [`SessionGuard`].

pub mod error;
pub mod guard;
pub mod route;
pub mod store;
pub mod wallet;

pub use error::{SessionError, StorageError, WalletError};
pub use guard::{Access, SessionGuard, protected_access};
pub use route::{DEFAULT_LANDING_ROUTE, resolve_landing_route};
pub use store::{MemoryArea, Scope, ScopedStore, SessionStore, StorageArea};
pub use wallet::{WalletSigner, challenge_message};

#[cfg(feature = "csr")]
pub use guard::{BrowserGuard, browser_guard};
#[cfg(feature = "csr")]
pub use wallet::BrowserWallet;
