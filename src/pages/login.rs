//! Login page supporting email + password and wallet-signature sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public entry point for unauthenticated visitors. Both modalities go through
//! the session guard; this page only owns form state, the shared auth-state
//! transitions and the post-login navigation.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::{DEFAULT_LANDING_ROUTE, SessionError};
use crate::components::field_error::FieldError;
use crate::config::ClientConfig;
use crate::net::types::Session;
use crate::state::auth::AuthState;
use crate::util::query::consume_registered_flag;
use crate::util::validate::{FieldErrors, login_errors};

pub const STORAGE_UNAVAILABLE_MESSAGE: &str = "This browser does not allow storing a session. Enable site storage and retry.";

/// Per-field errors for the password form; empty means it may be sent.
pub fn password_flow_errors(email: &str, password: &str) -> FieldErrors {
    login_errors(email, password).into_iter().collect()
}

/// Where a failed sign-in is shown: validation errors next to their field,
/// everything else under the email field.
pub fn session_error_fields(err: &SessionError) -> FieldErrors {
    let mut errors = FieldErrors::default();
    match err {
        SessionError::Validation(v) => errors.insert(v.field, v.message),
        _ => errors.insert("email", err.to_string()),
    }
    errors
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::default());
    let just_registered = consume_registered_flag();
    let busy = move || auth.get().is_busy();

    let settle = move |result: Result<Session, SessionError>| match result {
        Ok(session) => {
            let route = auth.try_update(|s| s.succeed(session.user)).unwrap_or(DEFAULT_LANDING_ROUTE);
            navigate(route, NavigateOptions::default());
        }
        Err(err) => {
            errors.set(session_error_fields(&err));
            auth.update(|s| s.fail(err.to_string()));
        }
    };

    let password_config = config.clone();
    let password_settle = settle.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();
        let found = password_flow_errors(&email_value, &password_value);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        if !auth.try_update(AuthState::begin).unwrap_or(false) {
            return;
        }
        errors.set(FieldErrors::default());
        let remember = remember_me.get();

        #[cfg(feature = "csr")]
        {
            let config = password_config.clone();
            let settle = password_settle.clone();
            leptos::task::spawn_local(async move {
                let Some(guard) = crate::auth::browser_guard(&config) else {
                    settle(Err(SessionError::auth(STORAGE_UNAVAILABLE_MESSAGE)));
                    return;
                };
                settle(guard.authenticate_with_password(&email_value, &password_value, remember).await);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&password_config, remember);
            password_settle(Err(SessionError::auth(STORAGE_UNAVAILABLE_MESSAGE)));
        }
    };

    let on_wallet = move |_| {
        if !auth.try_update(AuthState::begin).unwrap_or(false) {
            return;
        }
        errors.set(FieldErrors::default());

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let settle = settle.clone();
            leptos::task::spawn_local(async move {
                let Some(guard) = crate::auth::browser_guard(&config) else {
                    settle(Err(SessionError::auth(STORAGE_UNAVAILABLE_MESSAGE)));
                    return;
                };
                let wallet = crate::auth::BrowserWallet::detect();
                let signer = wallet.as_ref().map(|w| w as &dyn crate::auth::WalletSigner);
                settle(guard.authenticate_with_wallet(signer).await);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &config;
            settle(Err(SessionError::WalletUnavailable));
        }
    };

    let edit = move |field: &'static str, signal: RwSignal<String>, value: String| {
        signal.set(value);
        errors.update(|e| e.clear(field));
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Supply Chain Tracker"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <Show when=move || just_registered>
                    <div class="login-notice login-notice--success">
                        <h3>"Registration Successful!"</h3>
                        <p>"Your account has been created. Please sign in below."</p>
                    </div>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label for="email">"Email Address"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="you@company.com"
                        disabled=busy
                        prop:value=move || email.get()
                        on:input=move |ev| edit("email", email, event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().get("email").map(str::to_owned)) />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        disabled=busy
                        prop:value=move || password.get()
                        on:input=move |ev| edit("password", password, event_target_value(&ev))
                    />
                    <FieldError message=Signal::derive(move || errors.get().get("password").map(str::to_owned)) />
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            disabled=busy
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| remember_me.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="login-divider"></div>
                <button class="login-button login-button--wallet" disabled=busy on:click=on_wallet>
                    "Sign in with wallet"
                </button>
                <p class="login-card__footer">
                    "New to Supply Chain Tracker? "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
