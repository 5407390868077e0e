//! Client configuration: API prefix, public routes, and list sizing.
//!
//! The browser has no process environment, so the only override is the
//! compile-time `TRACKER_API_BASE` captured by `option_env!` at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api/v1";
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Typed client configuration shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Versioned API prefix prepended to every endpoint path.
    pub api_base: String,
    /// Public route unauthenticated visitors are sent to.
    pub login_route: String,
    /// Rows requested per product-list page.
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            login_route: DEFAULT_LOGIN_ROUTE.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Build config from values baked in at compile time.
    ///
    /// Optional:
    /// - `TRACKER_API_BASE`: API prefix, default `/api/v1`
    pub fn from_build_env() -> Self {
        Self::default().with_api_base_opt(option_env!("TRACKER_API_BASE"))
    }

    /// Override the API prefix. Trailing slashes are dropped so endpoint
    /// paths can always start with `/`.
    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = normalize_base(base);
        self
    }

    #[must_use]
    pub fn with_login_route(mut self, route: &str) -> Self {
        self.login_route = route.to_owned();
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size.max(1);
        self
    }

    fn with_api_base_opt(self, base: Option<&str>) -> Self {
        match base.map(str::trim) {
            Some(base) if !base.is_empty() => self.with_api_base(base),
            _ => self,
        }
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
