//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{
    dashboard::{DashboardHome, DashboardShell},
    login::LoginPage,
    product_new::ProductNewPage,
    products::ProductsPage,
    register::RegisterPage,
    tracking::TrackingPage,
};
use crate::state::auth::AuthState;
use crate::util::auth::stored_session;

/// Root application component.
///
/// Provides the shared config and auth-state contexts and sets up
/// client-side routing. Role landing routes all render the dashboard home.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::from_session(stored_session(&config).as_ref()));
    let login_route = config.login_route.clone();

    provide_context(config);
    provide_context(auth);

    let fallback_route = login_route.clone();
    view! {
        <Title text="Supply Chain Tracker" />

        <Router>
            <Routes fallback=move || view! { <Redirect path=fallback_route.clone() /> }>
                <Route path=StaticSegment("") view=move || view! { <Redirect path=login_route.clone() /> } />
                <Route path=StaticSegment("login") view=LoginPage />
                <Route path=StaticSegment("register") view=RegisterPage />
                <ParentRoute path=StaticSegment("dashboard") view=DashboardShell>
                    <Route path=StaticSegment("") view=DashboardHome />
                    <Route path=(StaticSegment("products"), StaticSegment("new")) view=ProductNewPage />
                    <Route
                        path=(StaticSegment("products"), ParamSegment("id"), StaticSegment("tracking"))
                        view=TrackingPage
                    />
                    <Route path=StaticSegment("products") view=ProductsPage />
                    <Route path=ParamSegment("role") view=DashboardHome />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
