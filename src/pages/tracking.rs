//! Chain-of-custody timeline for one product.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::config::ClientConfig;
use crate::net::api::ApiError;
use crate::net::types::{TrackingEvent, TrackingHistory};
use crate::state::tracking::{EventIcon, event_label};
use crate::util::auth::authorized;

pub const TRACKING_FALLBACK_MESSAGE: &str = "Tracking history could not be loaded.";

#[component]
pub fn TrackingPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let product_id = move || params.read().get("id").unwrap_or_default();

    let history = LocalResource::new(move || {
        let config = config.clone();
        let id = product_id();
        async move { load_history(&config, &id).await }
    });

    view! {
        <div class="tracking-page">
            <header class="page-header">
                <A href="/dashboard/products">"\u{2190}"</A>
                <div>
                    <h1>"Chain of Custody"</h1>
                    <p>"Blockchain history for product " <span class="mono">{product_id}</span></p>
                </div>
            </header>
            <Suspense fallback=|| view! { <p class="loading">"Querying ledger..."</p> }>
                {move || {
                    history
                        .get()
                        .map(|result| match result {
                            Err(e) => view! { <p class="error">{e.user_message(TRACKING_FALLBACK_MESSAGE)}</p> }.into_any(),
                            Ok(h) if h.history.is_empty() => {
                                view! { <p class="empty">"No tracking events found for this product yet."</p> }.into_any()
                            }
                            Ok(h) => {
                                view! {
                                    <ol class="timeline">{h.history.into_iter().map(timeline_entry).collect_view()}</ol>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

fn timeline_entry(event: TrackingEvent) -> impl IntoView {
    let icon = EventIcon::for_event(&event.event_type).glyph();
    let label = event_label(&event.event_type);
    view! {
        <li class="timeline__entry">
            <span class="timeline__icon">{icon}</span>
            <div class="timeline__card">
                <h3>{label} <span class="timeline__status">{event.status}</span></h3>
                <p class="timeline__time">{event.timestamp}</p>
                <p>"Location: " {event.location.unwrap_or_default()}</p>
                <p>"Updated by: " {event.updated_by.unwrap_or_default()}</p>
                <p>{event.description.unwrap_or_default()}</p>
            </div>
        </li>
    }
}

async fn load_history(config: &ClientConfig, product_id: &str) -> Result<TrackingHistory, ApiError> {
    let (api, token) = authorized(config)?;
    api.tracking_history(&token, product_id)
        .await
        .inspect_err(|e| log::warn!("tracking history failed: product={product_id} error={e}"))
}
