use super::*;

#[test]
fn leads_endpoint_uses_configured_base() {
    assert_eq!(leads_endpoint(&ApiConfig::default()), "/api/leads/");
}

#[test]
fn lead_update_endpoint_formats_expected_path() {
    let cfg = ApiConfig::from_values(Some("https://crm.example.com/api/"), None);
    assert_eq!(lead_update_endpoint(&cfg, 42), "https://crm.example.com/api/leads/42/update/");
}

#[test]
fn cookie_value_finds_named_cookie() {
    let cookies = "sessionid=abc; csrftoken=tok123; theme=dark";
    assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("tok123"));
}

#[test]
fn cookie_value_requires_exact_name() {
    let cookies = "xcsrftoken=nope; csrftoken2=nope";
    assert_eq!(cookie_value(cookies, "csrftoken"), None);
}

#[test]
fn cookie_value_handles_empty_cookie_string() {
    assert_eq!(cookie_value("", "csrftoken"), None);
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(403).to_string(), "request failed: 403");
    assert_eq!(ApiError::Network("offline".into()).to_string(), "network error: offline");
}

#[test]
fn fetch_leads_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(fetch_leads(&ApiConfig::default()));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn rest_updater_maps_transport_error_to_status_update_failed() {
    let updater = RestLeadUpdater::new(ApiConfig::default());
    let err = futures::executor::block_on(updater.update_lead_status(5, LeadStatus::Won)).unwrap_err();
    assert_eq!(err.lead_id, 5);
    assert_eq!(err.status, LeadStatus::Won);
    assert_eq!(err.reason, "not available outside the browser");
}

#[test]
fn lead_create_and_delete_endpoints() {
    let cfg = ApiConfig::default();
    assert_eq!(lead_create_endpoint(&cfg), "/api/leads/create/");
    assert_eq!(lead_delete_endpoint(&cfg, 7), "/api/leads/7/delete/");
}

#[test]
fn lead_mutations_are_unavailable_outside_browser() {
    let cfg = ApiConfig::default();
    let draft = LeadDraft { company: Some("Zambeef".to_owned()), ..LeadDraft::default() };
    assert_eq!(futures::executor::block_on(create_lead(&cfg, &draft)), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(update_lead(&cfg, 3, &draft)), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(delete_lead(&cfg, 3)), Err(ApiError::Unavailable));
}
