//! Browser storage areas for the session store.
//!
//! `localStorage` backs the durable scope and `sessionStorage` the ephemeral
//! one. Both only exist under the `csr` feature; native builds use
//! [`crate::auth::MemoryArea`].

#[cfg(feature = "csr")]
pub use browser::{BrowserArea, browser_store};

#[cfg(feature = "csr")]
mod browser {
    use crate::auth::error::StorageError;
    use crate::auth::store::{ScopedStore, StorageArea};

    /// One Web Storage object.
    #[derive(Clone, Debug)]
    pub struct BrowserArea(web_sys::Storage);

    impl StorageArea for BrowserArea {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }

        fn remove(&self, key: &str) {
            if let Err(e) = self.0.remove_item(key) {
                log::debug!("storage remove failed: key={key} error={e:?}");
            }
        }
    }

    /// Store over the page's `localStorage` and `sessionStorage`.
    /// `None` when either is unavailable (storage disabled, sandboxed frame).
    pub fn browser_store() -> Option<ScopedStore<BrowserArea>> {
        let window = web_sys::window()?;
        let durable = window.local_storage().ok().flatten()?;
        let ephemeral = window.session_storage().ok().flatten()?;
        Some(ScopedStore::new(BrowserArea(durable), BrowserArea(ephemeral)))
    }
}
