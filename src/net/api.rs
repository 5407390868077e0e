//! REST API client for the tracker backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call returns
//! [`ApiError::Unavailable`] since there is no browser fetch to drive.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses keep the server's `{message}` when it sent one so the
//! UI can surface it verbatim; transport and decode failures carry the
//! underlying description for logs only.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{
    DashboardStats, NewProduct, PasswordLogin, ProductPage, RegistrationRequest, Session, TrackingHistory, WalletLogin,
};
use crate::config::ClientConfig;

pub const AUTH_LOGIN_PATH: &str = "/auth/login";
pub const AUTH_WALLET_LOGIN_PATH: &str = "/auth/wallet-login";
pub const AUTH_REGISTER_PATH: &str = "/auth/register";
pub const DASHBOARD_STATS_PATH: &str = "/dashboard/stats";
pub const PRODUCTS_PATH: &str = "/products";
pub const PRODUCTS_SEARCH_PATH: &str = "/products/search";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// No browser fetch is available in this build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Server-supplied message, if the response carried a non-blank one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// User-facing message: the server's own words, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

// =============================================================================
// AUTH SEAM
// =============================================================================

/// Credential-exchange endpoints the session guard depends on.
///
/// Futures are `?Send`: browser fetch futures hold JS handles.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/login`.
    async fn login(&self, body: &PasswordLogin) -> Result<Session, ApiError>;

    /// `POST /auth/wallet-login`.
    async fn wallet_login(&self, body: &WalletLogin) -> Result<Session, ApiError>;
}

// =============================================================================
// QUERIES
// =============================================================================

/// Paging and search parameters for the product list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductQuery {
    /// Search term; blank means "list everything".
    pub search: String,
    /// Zero-based page index.
    pub page: u32,
    pub size: u32,
}

impl ProductQuery {
    /// Endpoint path: the search endpoint when a term is set.
    #[must_use]
    pub fn path(&self) -> &'static str {
        if self.term().is_some() { PRODUCTS_SEARCH_PATH } else { PRODUCTS_PATH }
    }

    /// Query parameters in request order. Values are raw; the HTTP layer
    /// percent-encodes them.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3);
        if let Some(term) = self.term() {
            params.push(("q", term.to_owned()));
        }
        params.push(("page", self.page.to_string()));
        params.push(("size", self.size.to_string()));
        params
    }

    fn term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }
}

fn tracking_path(product_id: &str) -> String {
    format!("/product-tracking/{product_id}/tracking")
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// HTTP client bound to the configured API prefix.
#[derive(Clone, Debug)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { base: config.api_base.clone() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// `POST /auth/register`. The success body is opaque and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects it.
    pub async fn register(&self, body: &RegistrationRequest) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = gloo_net::http::Request::post(&self.url(AUTH_REGISTER_PATH))
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            browser::send_unit(req).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(AUTH_REGISTER_PATH), body);
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /dashboard/stats`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body does not decode.
    pub async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = gloo_net::http::Request::get(&self.url(DASHBOARD_STATS_PATH))
                .header("Authorization", &bearer(token))
                .build()
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            browser::send_json(req).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(DASHBOARD_STATS_PATH), bearer(token));
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /products` or `GET /products/search`, depending on the query.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body does not decode.
    pub async fn products(&self, token: &str, query: &ProductQuery) -> Result<ProductPage, ApiError> {
        #[cfg(feature = "csr")]
        {
            let params = query.params();
            let req = gloo_net::http::Request::get(&self.url(query.path()))
                .header("Authorization", &bearer(token))
                .query(params.iter().map(|(k, v)| (*k, v.as_str())))
                .build()
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            browser::send_json(req).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(query.path()), bearer(token));
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /products`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects it.
    pub async fn create_product(&self, token: &str, body: &NewProduct) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = gloo_net::http::Request::post(&self.url(PRODUCTS_PATH))
                .header("Authorization", &bearer(token))
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            browser::send_unit(req).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(PRODUCTS_PATH), bearer(token), body);
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /product-tracking/{id}/tracking?includeHistory=true`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body does not decode.
    pub async fn tracking_history(&self, token: &str, product_id: &str) -> Result<TrackingHistory, ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = gloo_net::http::Request::get(&self.url(&tracking_path(product_id)))
                .header("Authorization", &bearer(token))
                .query([("includeHistory", "true")])
                .build()
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            browser::send_json(req).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(&tracking_path(product_id)), bearer(token));
            Err(ApiError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn login(&self, body: &PasswordLogin) -> Result<Session, ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = gloo_net::http::Request::post(&self.url(AUTH_LOGIN_PATH))
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            browser::send_json(req).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(AUTH_LOGIN_PATH), body);
            Err(ApiError::Unavailable)
        }
    }

    async fn wallet_login(&self, body: &WalletLogin) -> Result<Session, ApiError> {
        #[cfg(feature = "csr")]
        {
            let req = gloo_net::http::Request::post(&self.url(AUTH_WALLET_LOGIN_PATH))
                .json(body)
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            browser::send_json(req).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(AUTH_WALLET_LOGIN_PATH), body);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
mod browser {
    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;

    use super::ApiError;
    use crate::net::types::ErrorBody;

    pub(super) async fn send_json<T: DeserializeOwned>(req: Request) -> Result<T, ApiError> {
        let resp = send_checked(req).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn send_unit(req: Request) -> Result<(), ApiError> {
        send_checked(req).await.map(|_| ())
    }

    async fn send_checked(req: Request) -> Result<Response, ApiError> {
        let resp = req.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let message = resp.json::<ErrorBody>().await.ok().and_then(|body| body.message);
        log::debug!("api request failed: status={status}");
        Err(ApiError::Status { status, message })
    }
}
