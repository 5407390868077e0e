//! Session persistence over two storage scopes.
//!
//! DESIGN
//! ======
//! [`SessionStore`] is the capability the guard depends on. The stock
//! implementation, [`ScopedStore`], lays a session out as two string entries
//! (`authToken` and JSON `user`) in a pair of [`StorageArea`]s, one per scope.
//! Browser `localStorage`/`sessionStorage` and the in-memory area used in
//! tests both plug in as areas.
//!
//! TRADE-OFFS
//! ==========
//! The two entries are written one after the other with no transaction. A
//! torn pair (token without a decodable user) still counts as a token for
//! route gating but is not returned as a [`Session`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::error::StorageError;
use crate::net::types::{Session, User};

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "user";

/// Lifetime class of a persisted session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Survives browser restarts (`localStorage`).
    Durable,
    /// Cleared when the browsing session ends (`sessionStorage`).
    Ephemeral,
}

impl Scope {
    /// Read order: durable first.
    pub const ALL: [Scope; 2] = [Scope::Durable, Scope::Ephemeral];
}

/// Minimal string key/value surface shared by browser storage and memory.
pub trait StorageArea {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the area refuses the value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str);
}

/// Scoped session persistence.
pub trait SessionStore {
    /// Non-empty bearer token in `scope`, regardless of the user entry.
    fn token(&self, scope: Scope) -> Option<String>;

    /// Full session in `scope`, if both halves are present and decodable.
    fn read(&self, scope: Scope) -> Option<Session>;

    /// Write token and user together into `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if either half could not be stored; in that
    /// case the scope is left empty.
    fn write(&self, scope: Scope, session: &Session) -> Result<(), StorageError>;

    /// Remove token and user from `scope`. Idempotent.
    fn clear(&self, scope: Scope);
}

/// [`SessionStore`] over one [`StorageArea`] per scope.
#[derive(Clone, Debug)]
pub struct ScopedStore<A> {
    durable: A,
    ephemeral: A,
}

impl<A: StorageArea> ScopedStore<A> {
    pub fn new(durable: A, ephemeral: A) -> Self {
        Self { durable, ephemeral }
    }

    #[must_use]
    pub fn area(&self, scope: Scope) -> &A {
        match scope {
            Scope::Durable => &self.durable,
            Scope::Ephemeral => &self.ephemeral,
        }
    }
}

impl<A: StorageArea> SessionStore for ScopedStore<A> {
    fn token(&self, scope: Scope) -> Option<String> {
        self.area(scope).get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    fn read(&self, scope: Scope) -> Option<Session> {
        let token = self.token(scope)?;
        let Some(raw) = self.area(scope).get(USER_KEY) else {
            log::warn!("session token present without user entry: scope={scope:?}");
            return None;
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                log::warn!("stored user entry does not decode: scope={scope:?} error={e}");
                None
            }
        }
    }

    fn write(&self, scope: Scope, session: &Session) -> Result<(), StorageError> {
        let user = serde_json::to_string(&session.user).map_err(|e| StorageError::Encode(e.to_string()))?;
        let area = self.area(scope);
        area.set(TOKEN_KEY, &session.token)?;
        if let Err(e) = area.set(USER_KEY, &user) {
            area.remove(TOKEN_KEY);
            return Err(e);
        }
        Ok(())
    }

    fn clear(&self, scope: Scope) {
        let area = self.area(scope);
        area.remove(TOKEN_KEY);
        area.remove(USER_KEY);
    }
}

/// In-process storage area. Clones share the same entries, so a test can
/// keep a handle to inspect what the guard wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryArea {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryArea {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl StorageArea for MemoryArea {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl ScopedStore<MemoryArea> {
    /// Store backed by two fresh in-memory areas.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryArea::new(), MemoryArea::new())
    }
}
