use super::*;

#[test]
fn from_values_defaults_when_absent() {
    let cfg = ApiConfig::from_values(None, None);
    assert_eq!(cfg, ApiConfig::default());
    assert_eq!(cfg.base_url, "/api");
    assert_eq!(cfg.csrf_cookie, "csrftoken");
}

#[test]
fn from_values_trims_trailing_slashes() {
    let cfg = ApiConfig::from_values(Some("https://crm.example.com/api//"), None);
    assert_eq!(cfg.base_url, "https://crm.example.com/api");
}

#[test]
fn from_values_treats_blank_as_absent() {
    let cfg = ApiConfig::from_values(Some("   "), Some(""));
    assert_eq!(cfg, ApiConfig::default());
}

#[test]
fn from_values_keeps_custom_cookie_name() {
    let cfg = ApiConfig::from_values(None, Some(" XSRF-TOKEN "));
    assert_eq!(cfg.csrf_cookie, "XSRF-TOKEN");
}

#[test]
fn url_joins_path_onto_base() {
    let cfg = ApiConfig::from_values(Some("/crm/api/"), None);
    assert_eq!(cfg.url("/leads/"), "/crm/api/leads/");
}
