//! "New Lead" dialog. New leads always start in the `new` column.

use leptos::prelude::*;

use crate::components::lead_form::LeadFormFields;
use crate::net::types::{LeadDraft, LeadStatus};
use crate::state::lead_form::LeadForm;

#[component]
pub fn CreateLeadModal(on_create: Callback<LeadDraft>, on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(LeadForm::default());
    let form_error = RwSignal::new(None::<String>);

    let submit = move |_| match form.with(LeadForm::to_draft) {
        Ok(draft) => {
            form_error.set(None);
            on_create.run(LeadDraft { status: Some(LeadStatus::New), ..draft });
        }
        Err(e) => form_error.set(Some(e.to_string())),
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Lead"</h2>
                <LeadFormFields form=form/>
                <Show when=move || form_error.get().is_some()>
                    <p class="dialog__error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=submit>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
