//! Dashboard shell and home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DashboardShell` is the parent route of every `/dashboard/*` screen: it
//! gates on the stored session and frames the child route with the sidebar.
//! `DashboardHome` is the landing view for every role route.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Outlet;

use crate::components::sidebar::Sidebar;
use crate::components::stat_card::StatCardView;
use crate::config::ClientConfig;
use crate::net::api::ApiError;
use crate::net::types::DashboardStats;
use crate::state::auth::AuthState;
use crate::state::dashboard::{affiliation, greeting, role_badge, stat_cards};
use crate::util::auth::{ProtectedRoute, authorized};

pub const STATS_FALLBACK_MESSAGE: &str = "Dashboard statistics are unavailable right now.";

#[component]
pub fn DashboardShell() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <div class="dashboard-layout">
                <Sidebar />
                <main class="dashboard-main">
                    <Outlet />
                </main>
            </div>
        </ProtectedRoute>
    }
}

#[component]
pub fn DashboardHome() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();

    let stats = LocalResource::new(move || {
        let config = config.clone();
        async move { load_stats(&config).await }
    });

    let user = move || auth.get().user;

    view! {
        <div class="dashboard-home">
            {move || {
                user()
                    .map(|u| {
                        view! {
                            <header class="dashboard-home__welcome">
                                <h1>{greeting(&u)}</h1>
                                <p>{affiliation(&u)}</p>
                                <span class=role_badge(&u.role)>{u.role.to_string()}</span>
                            </header>
                        }
                    })
            }}
            <Suspense fallback=|| view! { <div class="spinner"></div> }>
                {move || {
                    stats
                        .get()
                        .map(|result| match result {
                            Ok(stats) => {
                                view! {
                                    <div class="stat-grid">
                                        {stat_cards(&stats)
                                            .into_iter()
                                            .map(|card| view! { <StatCardView card=card /> })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! {
                                    <p class="dashboard-home__error">{e.user_message(STATS_FALLBACK_MESSAGE)}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

async fn load_stats(config: &ClientConfig) -> Result<DashboardStats, ApiError> {
    let (api, token) = authorized(config)?;
    api.dashboard_stats(&token)
        .await
        .inspect_err(|e| log::warn!("dashboard stats failed: {e}"))
}
