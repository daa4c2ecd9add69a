//! Dashboard summary card: a title, a live count, click to drill in.

use leptos::prelude::*;

use crate::state::dashboard::DashboardCard;

#[component]
pub fn StatusCard(card: DashboardCard, count: Signal<usize>, on_open: Callback<DashboardCard>) -> impl IntoView {
    view! {
        <button class="status-card" on:click=move |_| on_open.run(card)>
            <span class="status-card__title">{card.title()}</span>
            <span class="status-card__count">{move || count.get()}</span>
        </button>
    }
}
