//! Wallet signer seam and the sign-in challenge message.
//!
//! The browser implementation talks to an EIP-1193 provider injected at
//! `window.ethereum` (`eth_requestAccounts`, then `personal_sign`). Tests use
//! scripted signers.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use async_trait::async_trait;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::error::WalletError;

pub const CHALLENGE_HEADLINE: &str = "Sign in to Supply Chain Tracker";

/// Something that can prove control of a blockchain address by signing.
#[async_trait(?Send)]
pub trait WalletSigner {
    /// Address the signature will be produced for.
    async fn address(&self) -> Result<String, WalletError>;

    /// Signature over `message` by `address`.
    async fn sign(&self, address: &str, message: &str) -> Result<String, WalletError>;
}

/// Human-readable challenge for one sign-in attempt.
///
/// Only the timestamp makes it unique; there is no server nonce.
#[must_use]
pub fn challenge_message(address: &str, at: OffsetDateTime) -> String {
    let stamp = at
        .format(&Rfc3339)
        .unwrap_or_else(|_| at.unix_timestamp().to_string());
    format!("{CHALLENGE_HEADLINE}\n\nWallet: {address}\nTimestamp: {stamp}")
}

#[cfg(feature = "csr")]
pub use browser::BrowserWallet;

#[cfg(feature = "csr")]
mod browser {
    use async_trait::async_trait;
    use js_sys::{Array, Function, Object, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::WalletSigner;
    use crate::auth::error::WalletError;

    /// EIP-1193 error code for a user-rejected request.
    const USER_REJECTED: f64 = 4001.0;

    /// Signer backed by the page's injected wallet provider.
    pub struct BrowserWallet {
        provider: JsValue,
    }

    impl BrowserWallet {
        /// Locate `window.ethereum`. `None` when no wallet extension is present.
        pub fn detect() -> Option<Self> {
            let window = web_sys::window()?;
            let provider = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
            if provider.is_undefined() || provider.is_null() {
                return None;
            }
            Some(Self { provider })
        }

        async fn request(&self, method: &str, params: Array) -> Result<JsValue, WalletError> {
            let request: Function = Reflect::get(&self.provider, &JsValue::from_str("request"))
                .map_err(provider_error)?
                .dyn_into()
                .map_err(|_| WalletError::Provider("provider has no request method".to_owned()))?;

            let args = Object::new();
            Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method)).map_err(provider_error)?;
            Reflect::set(&args, &JsValue::from_str("params"), &params).map_err(provider_error)?;

            let promise: Promise = request
                .call1(&self.provider, &args)
                .map_err(provider_error)?
                .dyn_into()
                .map_err(|_| WalletError::Provider("provider request did not return a promise".to_owned()))?;
            JsFuture::from(promise).await.map_err(provider_error)
        }
    }

    #[async_trait(?Send)]
    impl WalletSigner for BrowserWallet {
        async fn address(&self) -> Result<String, WalletError> {
            let accounts = self.request("eth_requestAccounts", Array::new()).await?;
            Array::from(&accounts)
                .get(0)
                .as_string()
                .filter(|address| !address.is_empty())
                .ok_or(WalletError::NoAccount)
        }

        async fn sign(&self, address: &str, message: &str) -> Result<String, WalletError> {
            let params = Array::of2(&JsValue::from_str(message), &JsValue::from_str(address));
            let signature = self.request("personal_sign", params).await?;
            signature
                .as_string()
                .ok_or_else(|| WalletError::Provider("signature was not a string".to_owned()))
        }
    }

    fn provider_error(err: JsValue) -> WalletError {
        let code = Reflect::get(&err, &JsValue::from_str("code")).ok().and_then(|c| c.as_f64());
        if code == Some(USER_REJECTED) {
            return WalletError::Rejected;
        }
        let message = Reflect::get(&err, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .unwrap_or_else(|| format!("{err:?}"));
        WalletError::Provider(message)
    }
}
