use super::*;

// =============================================================
// LeadStatus
// =============================================================

#[test]
fn pipeline_is_seven_columns_in_display_order() {
    let keys: Vec<&str> = LeadStatus::PIPELINE.iter().map(|s| s.key()).collect();
    assert_eq!(keys, vec!["new", "contacted", "qualified", "proposal", "negotiation", "won", "lost"]);
}

#[test]
fn from_key_accepts_superset_statuses() {
    assert_eq!(LeadStatus::from_key("hot"), Some(LeadStatus::Hot));
    assert_eq!(LeadStatus::from_key("inactive"), Some(LeadStatus::Inactive));
    assert_eq!(LeadStatus::from_key("HOT"), None);
}

#[test]
fn column_from_key_rejects_dashboard_only_statuses() {
    assert_eq!(LeadStatus::column_from_key("won"), Some(LeadStatus::Won));
    assert_eq!(LeadStatus::column_from_key("hot"), None);
    assert_eq!(LeadStatus::column_from_key("42"), None);
}

#[test]
fn key_round_trips_through_from_key() {
    for status in LeadStatus::ALL {
        assert_eq!(LeadStatus::from_key(status.key()), Some(status));
        assert_eq!(status.to_string(), status.key());
    }
}

#[test]
fn status_serializes_lowercase() {
    let json = serde_json::to_value(LeadStatus::Negotiation).unwrap();
    assert_eq!(json, serde_json::json!("negotiation"));
}

// =============================================================
// Lead
// =============================================================

#[test]
fn lead_deserializes_typed_fields_and_keeps_unknown_ones() {
    let lead: Lead = serde_json::from_value(serde_json::json!({
        "id": 7,
        "status": "proposal",
        "company": "Acme",
        "contact_name": "Jo Banda",
        "deal_value": "125000.50",
        "division": "Actuarial",
        "priority": "high",
        "assigned_to": 3,
        "assigned_to_name": "Mwila",
        "probability_of_completion": 60
    }))
    .unwrap();

    assert_eq!(lead.id, 7);
    assert_eq!(lead.status, LeadStatus::Proposal);
    assert_eq!(lead.details.company.as_deref(), Some("Acme"));
    assert_eq!(lead.details.deal_value, Some(125_000.5));
    assert!(lead.is_assigned());
    assert_eq!(lead.details.extra.get("probability_of_completion"), Some(&serde_json::json!(60)));
    assert!(!lead.details.extra.contains_key("id"));
    assert!(!lead.details.extra.contains_key("status"));
}

#[test]
fn lead_with_only_required_fields_has_empty_details() {
    let lead: Lead = serde_json::from_value(serde_json::json!({ "id": 1, "status": "new" })).unwrap();
    assert_eq!(lead.details, LeadDetails::default());
    assert!(!lead.is_assigned());
    assert!(lead.deal_value().abs() < f64::EPSILON);
}

#[test]
fn unparsable_deal_value_counts_as_zero() {
    let lead: Lead =
        serde_json::from_value(serde_json::json!({ "id": 1, "status": "new", "deal_value": "n/a" })).unwrap();
    assert_eq!(lead.details.deal_value, None);
    assert!(lead.deal_value().abs() < f64::EPSILON);
}

#[test]
fn numeric_deal_value_is_accepted() {
    let lead: Lead =
        serde_json::from_value(serde_json::json!({ "id": 1, "status": "won", "deal_value": 9000 })).unwrap();
    assert_eq!(lead.details.deal_value, Some(9000.0));
}

#[test]
fn unknown_status_is_rejected() {
    let result = serde_json::from_value::<Lead>(serde_json::json!({ "id": 1, "status": "archived" }));
    assert!(result.is_err());
}

#[test]
fn status_update_request_body_shape() {
    let body = serde_json::to_value(StatusUpdateRequest { status: LeadStatus::Won }).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "won" }));
}

#[test]
fn lead_draft_omits_unset_fields() {
    let draft = LeadDraft {
        company: Some("Zambeef".to_owned()),
        deal_value: Some(12_500.0),
        status: Some(LeadStatus::New),
        ..LeadDraft::default()
    };
    let body = serde_json::to_value(draft).unwrap();
    assert_eq!(body, serde_json::json!({ "company": "Zambeef", "deal_value": 12500.0, "status": "new" }));
}
