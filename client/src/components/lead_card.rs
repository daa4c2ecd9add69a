//! Draggable kanban card for one lead.
//!
//! DESIGN
//! ======
//! The card never mutates state itself. It reports clicks, drag start, drops
//! onto it (so dropping on a card means "this card's column") and drag end
//! through callbacks owned by the leads page. While another move is pending
//! the card is rendered `locked` and cannot be picked up.

use leptos::prelude::*;

use crate::net::types::Lead;
use crate::util::format::{date_part, display_or, format_amount, initials};

#[component]
pub fn LeadCard(
    lead: Lead,
    #[prop(optional)] dragging: bool,
    #[prop(optional)] locked: bool,
    on_open: Callback<i64>,
    on_drag_start: Callback<i64>,
    on_drop_target: Callback<String>,
    on_drag_end: Callback<()>,
) -> impl IntoView {
    let id = lead.id;
    let company = display_or(lead.details.company.as_deref(), "Untitled lead");
    let contact = display_or(lead.details.contact_name.as_deref(), "No Contact");
    let phone = lead.details.phone.clone();
    let value = format_amount(lead.deal_value());
    let updated = date_part(lead.details.updated_at.as_deref()).to_owned();
    let avatar = initials(lead.details.assigned_to_name.as_deref());
    let draggable = if locked { "false" } else { "true" };

    view! {
        <div
            class="lead-card"
            class:lead-card--dragging=dragging
            class:lead-card--locked=locked
            id=id.to_string()
            draggable=draggable
            on:click=move |_| on_open.run(id)
            on:dragstart=move |ev: leptos::ev::DragEvent| {
                #[cfg(feature = "hydrate")]
                {
                    if let Some(transfer) = ev.data_transfer() {
                        let _ = transfer.set_data("text/plain", &id.to_string());
                    }
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = ev;
                }
                on_drag_start.run(id);
            }
            on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
            on:drop=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                on_drop_target.run(id.to_string());
            }
            on:dragend=move |_| on_drag_end.run(())
        >
            <div class="lead-card__header">
                <h4 class="lead-card__company" title=company.clone()>{company.clone()}</h4>
                <span class="lead-card__value">"K " {value}</span>
            </div>
            <div class="lead-card__contact">{contact}</div>
            {phone.map(|p| view! { <div class="lead-card__phone">{p}</div> })}
            <div class="lead-card__footer">
                <span class="lead-card__updated">{updated}</span>
                <span class="lead-card__avatar">{avatar}</span>
            </div>
        </div>
    }
}
