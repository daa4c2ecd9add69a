//! One status column of the kanban board.
//!
//! The column body is a drop target keyed by the status wire key; cards
//! inside it are drop targets keyed by lead id.

use leptos::prelude::*;

use crate::components::lead_card::LeadCard;
use crate::net::types::{Lead, LeadStatus};

#[component]
pub fn KanbanColumn(
    status: LeadStatus,
    leads: Vec<Lead>,
    dragging: Option<i64>,
    /// A move is pending; cards cannot be picked up.
    locked: bool,
    on_open: Callback<i64>,
    on_drag_start: Callback<i64>,
    on_drop_target: Callback<String>,
    on_drag_end: Callback<()>,
) -> impl IntoView {
    let count = leads.len();
    let is_empty = leads.is_empty();
    let cards = leads
        .into_iter()
        .map(|lead| {
            let is_dragging = dragging == Some(lead.id);
            view! {
                <LeadCard
                    lead=lead
                    dragging=is_dragging
                    locked=locked
                    on_open=on_open
                    on_drag_start=on_drag_start
                    on_drop_target=on_drop_target
                    on_drag_end=on_drag_end
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="kanban-column">
            <header class="kanban-column__header" style=format!("border-bottom-color: {}", status.color())>
                <h3 class="kanban-column__title">{status.label()}</h3>
                <span class="kanban-column__count">{count}</span>
            </header>
            <div
                class="kanban-column__body"
                id=status.key()
                on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
                on:drop=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    on_drop_target.run(status.key().to_owned());
                }
            >
                {cards}
                <Show when=move || is_empty>
                    <div class="kanban-column__placeholder">"Drop here"</div>
                </Show>
            </div>
        </section>
    }
}
