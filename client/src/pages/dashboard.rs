//! Dashboard page: lead counts by stage, pipeline value, division breakdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It fetches the lead list once and derives every
//! figure client-side; clicking a card or a division opens a quick-view of
//! the matching leads.

use leptos::prelude::*;

use crate::components::lead_list_modal::LeadListModal;
#[cfg(feature = "hydrate")]
use crate::components::notice_tray::notify_error;
use crate::components::status_card::StatusCard;
use crate::net::config::ApiConfig;
use crate::state::dashboard::{DashboardCard, DashboardState, DashboardStats, QuickView, division_counts};
use crate::state::notices::NoticesState;
use crate::util::format::format_amount;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticesState>>();
    let config = expect_context::<ApiConfig>();
    let dashboard = RwSignal::new(DashboardState { loading: true, ..DashboardState::default() });

    Effect::new(move |_| load_dashboard(dashboard, notices, config.clone()));

    let stats = Memo::new(move |_| dashboard.with(|d| DashboardStats::from_leads(&d.leads)));
    let on_open = Callback::new(move |card: DashboardCard| {
        dashboard.update(|d| d.quick_view = Some(QuickView::Card(card)));
    });
    let on_close = Callback::new(move |()| dashboard.update(|d| d.quick_view = None));

    let cards = DashboardCard::ALL
        .into_iter()
        .map(|card| {
            let count = Signal::derive(move || dashboard.with(|d| card.count(&d.leads)));
            view! { <StatusCard card=card count=count on_open=on_open/> }
        })
        .collect::<Vec<_>>();

    let divisions = move || {
        dashboard
            .with(|d| division_counts(&d.leads))
            .into_iter()
            .map(|(division, count)| {
                let target = division.clone();
                view! {
                    <li
                        class="division-list__item"
                        on:click=move |_| {
                            dashboard.update(|d| d.quick_view = Some(QuickView::Division(target.clone())));
                        }
                    >
                        <span class="division-list__name">{division}</span>
                        <span class="division-list__count">{count} " leads"</span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let quick_view = move || {
        let (title, leads) = dashboard.with(|d| {
            let open = d.quick_view.as_ref()?;
            Some((open.title(), open.select(&d.leads)))
        })?;
        Some(view! { <LeadListModal title=title leads=leads on_close=on_close/> })
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Dashboard"</span>
            </header>

            <Show when=move || dashboard.get().error.is_some()>
                <p class="dashboard-page__error">{move || dashboard.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !dashboard.get().loading
                fallback=move || view! { <p>"Loading dashboard..."</p> }
            >
                <div class="dashboard-page__summary">
                    <div class="summary-figure">
                        <span class="summary-figure__label">"Total Pipeline"</span>
                        <span class="summary-figure__value">
                            "K " {move || format_amount(stats.get().total_pipeline)}
                        </span>
                    </div>
                    <div class="summary-figure">
                        <span class="summary-figure__label">"Conversion Rate"</span>
                        <span class="summary-figure__value">
                            {move || format!("{:.1}%", stats.get().conversion_rate)}
                        </span>
                    </div>
                    <div class="summary-figure">
                        <span class="summary-figure__label">"Avg Deal Size"</span>
                        <span class="summary-figure__value">
                            "K " {move || format_amount(stats.get().avg_deal)}
                        </span>
                    </div>
                    <div class="summary-figure">
                        <span class="summary-figure__label">"Won Value"</span>
                        <span class="summary-figure__value">
                            "K " {move || format_amount(stats.get().won_value)}
                        </span>
                    </div>
                    <div class="summary-figure">
                        <span class="summary-figure__label">"Total Leads"</span>
                        <span class="summary-figure__value">{move || stats.get().total}</span>
                    </div>
                </div>
                <section class="dashboard-page__divisions">
                    <h3>"By Division"</h3>
                    <ul class="division-list">{divisions}</ul>
                </section>
            </Show>

            <div class="dashboard-page__cards">{cards}</div>

            {quick_view}
        </div>
    }
}

fn load_dashboard(dashboard: RwSignal<DashboardState>, notices: RwSignal<NoticesState>, config: ApiConfig) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_leads(&config).await {
                Ok(leads) => dashboard.update(|d| {
                    d.leads = leads;
                    d.loading = false;
                    d.error = None;
                }),
                Err(e) => {
                    log::warn!("dashboard fetch failed: {e}");
                    dashboard.update(|d| {
                        d.loading = false;
                        d.error = Some("Unable to load dashboard data. Please ensure you are logged in.".to_owned());
                    });
                    notify_error(notices, format!("Could not load leads: {e}"));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (dashboard, notices, config);
    }
}
