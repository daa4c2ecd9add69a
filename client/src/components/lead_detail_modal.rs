//! Detail dialog for one lead, opened by clicking its card or table row.
//!
//! DESIGN
//! ======
//! The dialog owns only its edit buffer and the delete confirmation step.
//! Saving and deleting are reported to the leads page, which talks to the
//! backend and updates the board collection with the result.

use leptos::prelude::*;

use crate::components::lead_form::LeadFormFields;
use crate::net::types::{Lead, LeadDraft};
use crate::state::lead_form::LeadForm;
use crate::util::format::{date_part, display_or, format_amount};

#[component]
pub fn LeadDetailModal(
    lead: Lead,
    on_save: Callback<LeadDraft>,
    on_delete: Callback<i64>,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = lead.id;
    let form = RwSignal::new(LeadForm::from_lead(&lead));
    let editing = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let d = &lead.details;
    let rows = [
        ("Contact", display_or(d.contact_name.as_deref(), "No Contact")),
        ("Phone", display_or(d.phone.as_deref(), "-")),
        ("Status", lead.status.label().to_owned()),
        ("Division", display_or(d.division.as_deref(), "-")),
        ("Priority", display_or(d.priority.as_deref(), "-")),
        ("Deal Value", format!("K {}", format_amount(lead.deal_value()))),
        ("Assigned To", display_or(d.assigned_to_name.as_deref(), "Unassigned")),
        ("Updated", display_or(Some(date_part(d.updated_at.as_deref())), "-")),
    ];
    let summary = move || {
        rows.clone()
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="lead-detail__row">
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };
    let title = display_or(d.company.as_deref(), "Untitled lead");

    let save = move |_| match form.with(LeadForm::to_draft) {
        Ok(draft) => {
            form_error.set(None);
            on_save.run(draft);
        }
        Err(e) => form_error.set(Some(e.to_string())),
    };
    let delete = move |_| {
        if confirm_delete.get() {
            on_delete.run(id);
        } else {
            confirm_delete.set(true);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide lead-detail" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <Show
                    when=move || editing.get()
                    fallback=move || view! { <dl class="lead-detail__summary">{summary()}</dl> }
                >
                    <LeadFormFields form=form/>
                </Show>
                <Show when=move || form_error.get().is_some()>
                    <p class="dialog__error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn btn--danger" on:click=delete>
                        {move || if confirm_delete.get() { "Confirm delete" } else { "Delete" }}
                    </button>
                    <span class="toolbar__spacer"></span>
                    <Show
                        when=move || editing.get()
                        fallback=move || {
                            view! {
                                <button class="btn" on:click=move |_| editing.set(true)>
                                    "Edit"
                                </button>
                            }
                        }
                    >
                        <button class="btn btn--primary" on:click=save>
                            "Save"
                        </button>
                    </Show>
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
