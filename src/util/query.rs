//! One-shot query flags on the current location.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

pub const REGISTERED_FLAG: &str = "registered";

/// Whether a `location.search` string carries `registered=true`.
#[must_use]
pub fn has_registered_flag(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key == REGISTERED_FLAG && value == "true")
}

/// Read the post-registration flag and strip the query from the visible
/// address without reloading. Returns `true` at most once per visit.
pub fn consume_registered_flag() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let location = window.location();
        let search = location.search().unwrap_or_default();
        if !has_registered_flag(&search) {
            return false;
        }
        let path = location.pathname().unwrap_or_default();
        let title = window.document().map(|doc| doc.title()).unwrap_or_default();
        if let Ok(history) = window.history() {
            if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, &title, Some(&path)) {
                log::debug!("registered flag strip failed: {e:?}");
            }
        }
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
