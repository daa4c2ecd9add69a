use super::*;
use crate::net::types::LeadDetails;

fn lead(id: i64, status: LeadStatus, division: Option<&str>) -> Lead {
    Lead {
        id,
        status,
        details: LeadDetails { division: division.map(str::to_owned), ..LeadDetails::default() },
    }
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_unfiltered_kanban() {
    let state = UiState::default();
    assert_eq!(state.view_mode, LeadsViewMode::Kanban);
    assert_eq!(state.filter, LeadFilter::default());
    assert!(!state.show_filters);
    assert!(!state.show_create);
}

// =============================================================
// LeadFilter
// =============================================================

#[test]
fn default_filter_matches_everything() {
    let filter = LeadFilter::default();
    assert!(!filter.is_active());
    assert!(filter.matches(&lead(1, LeadStatus::New, None)));
    assert!(filter.matches(&lead(2, LeadStatus::Hot, Some("Pensions"))));
}

#[test]
fn status_filter_excludes_other_statuses() {
    let filter = LeadFilter { status: Some(LeadStatus::Won), division: None };
    assert!(filter.matches(&lead(1, LeadStatus::Won, None)));
    assert!(!filter.matches(&lead(2, LeadStatus::Lost, None)));
}

#[test]
fn division_filter_is_case_insensitive() {
    let filter = LeadFilter { status: None, division: Some("actuarial".to_owned()) };
    assert!(filter.matches(&lead(1, LeadStatus::New, Some("Actuarial"))));
    assert!(!filter.matches(&lead(2, LeadStatus::New, Some("Pensions"))));
}

#[test]
fn division_filter_excludes_leads_without_division() {
    let filter = LeadFilter { status: None, division: Some("actuarial".to_owned()) };
    assert!(!filter.matches(&lead(1, LeadStatus::New, None)));
}

#[test]
fn select_keys_update_filter() {
    let mut filter = LeadFilter::default();
    filter.set_status_key("proposal");
    filter.set_division_key("Pensions");
    assert_eq!(filter.status, Some(LeadStatus::Proposal));
    assert_eq!(filter.division.as_deref(), Some("Pensions"));
    assert!(filter.is_active());

    filter.set_status_key("all");
    filter.set_division_key("all");
    assert_eq!(filter, LeadFilter::default());
}
