//! Quick-view modal listing the leads behind a dashboard card.

use leptos::prelude::*;

use crate::components::leads_table::LeadsTable;
use crate::net::types::Lead;

#[component]
pub fn LeadListModal(title: String, leads: Vec<Lead>, on_close: Callback<()>) -> impl IntoView {
    let count = leads.len();
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{title} " (" {count} ")"</h2>
                <LeadsTable leads=leads/>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
