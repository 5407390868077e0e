//! Headline counter card for the dashboard home.

use leptos::prelude::*;

use crate::state::dashboard::StatCard;

#[component]
pub fn StatCardView(card: StatCard) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{}", card.tone)>
            <p class="stat-card__title">{card.title}</p>
            <h3 class="stat-card__value">{card.value}</h3>
        </div>
    }
}
