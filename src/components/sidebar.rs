//! Dashboard navigation rail with the signed-in user and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by every dashboard page. Logout clears both storage scopes, resets
//! the shared auth state and navigates to the login route.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

/// A sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    /// Highlight only on an exact path match.
    pub exact: bool,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { label: "Overview", path: "/dashboard", exact: true },
    NavItem { label: "Product Search", path: "/dashboard/products", exact: true },
    NavItem { label: "Add Product", path: "/dashboard/products/new", exact: false },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let user_name = move || auth.get().user.map(|u| u.display_name()).unwrap_or_default();

    let on_logout = move |_| {
        let target = sign_out(&config);
        auth.update(AuthState::sign_out);
        navigate(&target, NavigateOptions::default());
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Tracker" <span>"HQ"</span></div>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <A href=item.path exact=item.exact>
                                <span class="sidebar__link">{item.label}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar__footer">
                <p class="sidebar__user">{user_name}</p>
                <button class="sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
