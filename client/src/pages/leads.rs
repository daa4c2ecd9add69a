//! Leads page: kanban board with drag-and-drop status moves, or a flat list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the lead collection once on mount into the shared
//! `RwSignal<KanbanState>`. Drops are applied to that state synchronously in
//! the event handler; the REST call runs afterwards and its outcome is
//! settled back into the same signal.
//!
//! ERROR HANDLING
//! ==============
//! A rejected status update rolls the board back and raises one error notice.
//! A failed fetch leaves the board empty with an inline error and a retry
//! button. Failed edits, deletes and creates leave the collection untouched
//! and raise a notice.

use leptos::prelude::*;

use crate::components::create_lead_modal::CreateLeadModal;
use crate::components::kanban_column::KanbanColumn;
use crate::components::lead_detail_modal::LeadDetailModal;
use crate::components::leads_table::LeadsTable;
#[cfg(feature = "hydrate")]
use crate::components::notice_tray::notify_error;
use crate::components::notice_tray::notify;
use crate::net::config::ApiConfig;
use crate::net::types::{Lead, LeadDraft, LeadStatus};
use crate::state::dashboard::division_counts;
use crate::state::kanban::{DropOutcome, KanbanState, StatusChange};
use crate::state::notices::{NoticeLevel, NoticesState};
use crate::state::ui::{LeadsViewMode, UiState};

#[component]
pub fn LeadsPage() -> impl IntoView {
    let kanban = expect_context::<RwSignal<KanbanState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notices = expect_context::<RwSignal<NoticesState>>();
    let config = expect_context::<ApiConfig>();

    let config_mount = config.clone();
    Effect::new(move |_| load_leads(kanban, notices, config_mount.clone()));

    let on_open = Callback::new(move |lead_id: i64| {
        kanban.update(|k| {
            k.open_detail(lead_id);
        });
    });
    let on_close_detail = Callback::new(move |()| kanban.update(KanbanState::close_detail));
    // Cards are non-draggable while a move is pending, so a refusal here
    // only happens if the browser raced the re-render.
    let on_drag_start = Callback::new(move |lead_id: i64| {
        let mut started = false;
        kanban.update(|k| started = k.drag_start(lead_id));
        if !started {
            notify(notices, NoticeLevel::Info, "Wait for the previous move to finish.".to_owned());
        }
    });
    let on_drag_end = Callback::new(move |()| kanban.update(KanbanState::drag_cancel));
    let config_drop = config.clone();
    let on_drop_target = Callback::new(move |target: String| {
        let mut outcome = DropOutcome::Unresolved;
        kanban.update(|k| outcome = k.drop_on(Some(&target)));
        if let DropOutcome::Applied(change) = outcome {
            send_status_change(kanban, notices, config_drop.clone(), change);
        }
    });
    let config_save = config.clone();
    let on_save = Callback::new(move |draft: LeadDraft| {
        let Some(lead_id) = kanban.with(|k| k.selected().map(|l| l.id)) else {
            return;
        };
        save_lead(kanban, notices, config_save.clone(), lead_id, draft);
    });
    let config_delete = config.clone();
    let on_delete = Callback::new(move |lead_id: i64| delete_lead(kanban, notices, config_delete.clone(), lead_id));
    let config_create = config.clone();
    let on_create = Callback::new(move |draft: LeadDraft| create_lead(kanban, ui, notices, config_create.clone(), draft));
    let on_close_create = Callback::new(move |()| ui.update(|u| u.show_create = false));

    let config_retry = config;
    let on_retry = move |_| load_leads(kanban, notices, config_retry.clone());

    let filtered = move || -> Vec<Lead> {
        let filter = ui.with(|u| u.filter.clone());
        kanban.with(|k| k.leads().iter().filter(|l| filter.matches(l)).cloned().collect())
    };

    let divisions = move || -> Vec<String> {
        kanban.with(|k| division_counts(k.leads()).into_iter().map(|(d, _)| d).collect())
    };

    let board = move || {
        let filter = ui.with(|u| u.filter.clone());
        let (columns, dragging, locked) = kanban.with(|k| {
            let columns = k
                .columns(&filter)
                .into_iter()
                .map(|(status, leads)| (status, leads.into_iter().cloned().collect::<Vec<Lead>>()))
                .collect::<Vec<_>>();
            (columns, k.dragging(), !k.can_drag())
        });
        columns
            .into_iter()
            .map(|(status, leads)| {
                view! {
                    <KanbanColumn
                        status=status
                        leads=leads
                        dragging=dragging
                        locked=locked
                        on_open=on_open
                        on_drag_start=on_drag_start
                        on_drop_target=on_drop_target
                        on_drag_end=on_drag_end
                    />
                }
            })
            .collect::<Vec<_>>()
    };

    let selected = Memo::new(move |_| kanban.with(|k| k.selected().cloned()));
    let detail = move || {
        selected.get().map(|lead| {
            view! { <LeadDetailModal lead=lead on_save=on_save on_delete=on_delete on_close=on_close_detail/> }
        })
    };
    let create = move || {
        ui.get()
            .show_create
            .then(|| view! { <CreateLeadModal on_create=on_create on_close=on_close_create/> })
    };

    view! {
        <div class="leads-page">
            <header class="leads-page__header toolbar">
                <span class="toolbar__title">"Leads"</span>
                <span class="toolbar__spacer"></span>
                <button
                    class="btn"
                    class:btn--active=move || ui.get().view_mode == LeadsViewMode::Kanban
                    on:click=move |_| ui.update(|u| u.view_mode = LeadsViewMode::Kanban)
                >
                    "Board"
                </button>
                <button
                    class="btn"
                    class:btn--active=move || ui.get().view_mode == LeadsViewMode::List
                    on:click=move |_| ui.update(|u| u.view_mode = LeadsViewMode::List)
                >
                    "List"
                </button>
                <button
                    class="btn"
                    class:btn--active=move || ui.get().filter.is_active()
                    on:click=move |_| ui.update(|u| u.show_filters = !u.show_filters)
                >
                    "Filters"
                </button>
                <button class="btn btn--primary" on:click=move |_| ui.update(|u| u.show_create = true)>
                    "New Lead"
                </button>
            </header>

            <Show when=move || ui.get().show_filters>
                <div class="leads-page__filters">
                    <label class="filter">
                        "Status"
                        <select on:change=move |ev| {
                            let key = event_target_value(&ev);
                            ui.update(|u| u.filter.set_status_key(&key));
                        }>
                            <option value="all">"All statuses"</option>
                            {LeadStatus::PIPELINE
                                .into_iter()
                                .map(|s| view! { <option value=s.key()>{s.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="filter">
                        "Division"
                        <select on:change=move |ev| {
                            let key = event_target_value(&ev);
                            ui.update(|u| u.filter.set_division_key(&key));
                        }>
                            <option value="all">"All divisions"</option>
                            {move || {
                                divisions()
                                    .into_iter()
                                    .map(|d| {
                                        let value = d.clone();
                                        view! { <option value=value>{d}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                </div>
            </Show>

            <Show when=move || kanban.get().error.is_some()>
                <div class="leads-page__error">
                    <p>{move || kanban.get().error.unwrap_or_default()}</p>
                    <button class="btn" on:click=on_retry.clone()>"Retry"</button>
                </div>
            </Show>

            <Show
                when=move || !kanban.get().loading
                fallback=move || view! { <p class="leads-page__loading">"Loading leads..."</p> }
            >
                <Show
                    when=move || ui.get().view_mode == LeadsViewMode::Kanban
                    fallback=move || view! { <LeadsTable leads=filtered() on_open=on_open/> }
                >
                    <div class="kanban">{board}</div>
                </Show>
            </Show>

            {detail}
            {create}
        </div>
    }
}

/// Fetch the collection into `kanban`, reporting failures inline and as a notice.
fn load_leads(kanban: RwSignal<KanbanState>, notices: RwSignal<NoticesState>, config: ApiConfig) {
    kanban.update(|k| {
        k.loading = true;
        k.error = None;
    });
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_leads(&config).await {
                Ok(leads) => kanban.update(|k| k.replace_all(leads)),
                Err(e) => {
                    log::warn!("lead fetch failed: {e}");
                    kanban.update(|k| {
                        k.loading = false;
                        k.error = Some(format!("Could not load leads: {e}"));
                    });
                    notify_error(notices, format!("Could not load leads: {e}"));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notices, config);
    }
}

/// Persist an applied drop and settle the outcome back into `kanban`.
fn send_status_change(
    kanban: RwSignal<KanbanState>,
    notices: RwSignal<NoticesState>,
    config: ApiConfig,
    change: StatusChange,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let updater = crate::net::api::RestLeadUpdater::new(config);
            let result = crate::state::kanban::commit(&updater, &change).await;
            let mut failure = None;
            kanban.update(|k| failure = k.settle(&change, result));
            if let Some(err) = failure {
                log::warn!("status move rolled back: {err}");
                notify_error(notices, err.to_string());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kanban, notices, config, change);
    }
}

/// Persist edited fields, then swap in the backend's copy and close the dialog.
fn save_lead(kanban: RwSignal<KanbanState>, notices: RwSignal<NoticesState>, config: ApiConfig, lead_id: i64, draft: LeadDraft) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::update_lead(&config, lead_id, &draft).await {
                Ok(lead) => kanban.update(|k| {
                    k.replace_one(lead);
                    k.close_detail();
                }),
                Err(e) => {
                    log::warn!("lead {lead_id} update failed: {e}");
                    notify_error(notices, format!("Could not save lead: {e}"));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kanban, notices, config, lead_id, draft);
    }
}

/// Delete a lead and drop it from the board once the backend confirms.
fn delete_lead(kanban: RwSignal<KanbanState>, notices: RwSignal<NoticesState>, config: ApiConfig, lead_id: i64) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_lead(&config, lead_id).await {
                Ok(()) => kanban.update(|k| {
                    k.remove(lead_id);
                }),
                Err(e) => {
                    log::warn!("lead {lead_id} delete failed: {e}");
                    notify_error(notices, format!("Could not delete lead: {e}"));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kanban, notices, config, lead_id);
    }
}

/// Create a lead and put it at the front of the board.
fn create_lead(
    kanban: RwSignal<KanbanState>,
    ui: RwSignal<UiState>,
    notices: RwSignal<NoticesState>,
    config: ApiConfig,
    draft: LeadDraft,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::create_lead(&config, &draft).await {
                Ok(lead) => {
                    kanban.update(|k| k.prepend(lead));
                    ui.update(|u| u.show_create = false);
                }
                Err(e) => {
                    log::warn!("lead create failed: {e}");
                    notify_error(notices, format!("Could not create lead: {e}"));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (kanban, ui, notices, config, draft);
    }
}
