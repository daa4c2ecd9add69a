//! Text inputs bound to a [`LeadForm`] signal, shared by the edit and create
//! dialogs.

use leptos::prelude::*;

use crate::state::lead_form::{LeadField, LeadForm};

#[component]
pub fn LeadFormFields(form: RwSignal<LeadForm>) -> impl IntoView {
    let inputs = LeadField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <label class="lead-form__field">
                    <span class="lead-form__label">{field.label()}</span>
                    <input
                        class="lead-form__input"
                        type="text"
                        prop:value=move || form.with(|f| f.get(field).to_owned())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set(field, value));
                        }
                    />
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="lead-form">{inputs}</div> }
}
