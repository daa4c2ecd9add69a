//! Flat table rendering of leads, used by the list view and the dashboard
//! quick-view modal.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::Lead;
use crate::util::format::{display_or, format_amount};

#[component]
pub fn LeadsTable(
    leads: Vec<Lead>,
    /// Row click handler; rows are inert without one.
    #[prop(optional)]
    on_open: Option<Callback<i64>>,
) -> impl IntoView {
    if leads.is_empty() {
        return view! { <p class="leads-table__empty">"No leads match."</p> }.into_any();
    }

    let rows = leads
        .into_iter()
        .map(|lead| {
            let id = lead.id;
            let status = lead.status;
            let value = format_amount(lead.deal_value());
            let details = lead.details;
            view! {
                <tr
                    class:leads-table__row--clickable=on_open.is_some()
                    on:click=move |_| {
                        if let Some(open) = on_open {
                            open.run(id);
                        }
                    }
                >
                    <td>{display_or(details.company.as_deref(), "Untitled lead")}</td>
                    <td>{display_or(details.contact_name.as_deref(), "No Contact")}</td>
                    <td>
                        <span class="status-pill" style=format!("background: {}", status.color())>
                            {status.label()}
                        </span>
                    </td>
                    <td>{details.division.unwrap_or_default()}</td>
                    <td class="leads-table__value">"K " {value}</td>
                    <td>{display_or(details.assigned_to_name.as_deref(), "Unassigned")}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class="leads-table">
            <thead>
                <tr>
                    <th>"Company"</th>
                    <th>"Contact"</th>
                    <th>"Status"</th>
                    <th>"Division"</th>
                    <th>"Value"</th>
                    <th>"Assigned To"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_any()
}
