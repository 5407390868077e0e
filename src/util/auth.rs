//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical gating through [`ProtectedRoute`], and
//! every page that needs the bearer token reads it through
//! [`stored_session`]. Both go to browser storage on each call. The gate
//! re-runs on every pathname change under the protected parent route, so a
//! logout in another tab is seen on the next navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::{Access, SessionStore, protected_access};
use crate::config::ClientConfig;
use crate::net::api::{ApiError, HttpApi};
use crate::net::types::Session;

pub const SIGNED_OUT_MESSAGE: &str = "Your session has ended. Please sign in again.";

/// Gate decision for a navigation to `pathname`, read fresh from `store`.
pub fn access_on_navigation<S: SessionStore>(store: &S, config: &ClientConfig, pathname: &str) -> Access {
    let access = protected_access(store, &config.login_route);
    if let Access::RedirectTo(to) = &access {
        log::info!("protected navigation refused: path={pathname} to={to}");
    }
    access
}

/// Gate decision for `pathname` against the current browser storage.
pub fn check_access(config: &ClientConfig, pathname: &str) -> Access {
    #[cfg(feature = "csr")]
    {
        if let Some(store) = crate::util::storage::browser_store() {
            return access_on_navigation(&store, config, pathname);
        }
        log::warn!("browser storage unavailable; treating visitor as signed out");
    }
    #[cfg(not(feature = "csr"))]
    let _ = pathname;
    Access::RedirectTo(config.login_route.clone())
}

/// Re-check access whenever `pathname` changes and navigate away when the
/// session is gone. The first value is skipped; callers gate it inline.
pub fn install_protected_redirect<F>(config: ClientConfig, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::watch(
        move || pathname.get(),
        move |path, _, _| {
            if let Some(to) = redirect_path(&check_access(&config, path)) {
                navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        },
        false,
    );
}

/// Session persisted in browser storage, durable scope first.
pub fn stored_session(config: &ClientConfig) -> Option<Session> {
    #[cfg(feature = "csr")]
    {
        crate::auth::browser_guard(config)?.current_session()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        None
    }
}

/// API client plus the bearer token of the stored session.
///
/// # Errors
///
/// Returns a 401 [`ApiError::Status`] when no session is stored, without
/// sending anything.
pub fn authorized(config: &ClientConfig) -> Result<(HttpApi, String), ApiError> {
    let session = stored_session(config).ok_or_else(|| ApiError::Status {
        status: 401,
        message: Some(SIGNED_OUT_MESSAGE.to_owned()),
    })?;
    Ok((HttpApi::new(config), session.token))
}

/// Clear both storage scopes. Returns the route to send the visitor to.
pub fn sign_out(config: &ClientConfig) -> String {
    #[cfg(feature = "csr")]
    {
        if let Some(guard) = crate::auth::browser_guard(config) {
            return guard.logout().to_owned();
        }
    }
    config.login_route.clone()
}

/// Where to send the visitor instead of rendering, if anywhere.
#[must_use]
pub fn redirect_path(access: &Access) -> Option<&str> {
    match access {
        Access::Allow => None,
        Access::RedirectTo(path) => Some(path),
    }
}

/// Render `children` only when a session token is present; otherwise
/// redirect to the login route. Child-route navigations are re-checked.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let location = use_location();
    install_protected_redirect(config.clone(), location.pathname, use_navigate());

    let access = check_access(&config, &location.pathname.get_untracked());
    match redirect_path(&access) {
        None => children().into_any(),
        Some(path) => {
            log::debug!("protected route redirect: to={path}");
            view! { <Redirect path=path.to_owned() /> }.into_any()
        }
    }
}
