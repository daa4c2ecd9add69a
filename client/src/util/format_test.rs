use super::*;

#[test]
fn format_amount_groups_thousands() {
    assert_eq!(format_amount(12_500.0), "12,500");
    assert_eq!(format_amount(1_234_567.0), "1,234,567");
    assert_eq!(format_amount(999.0), "999");
}

#[test]
fn format_amount_rounds_fractions() {
    assert_eq!(format_amount(1_999.6), "2,000");
}

#[test]
fn format_amount_zero_for_non_positive_or_non_finite() {
    assert_eq!(format_amount(0.0), "0");
    assert_eq!(format_amount(-50.0), "0");
    assert_eq!(format_amount(f64::NAN), "0");
}

#[test]
fn initials_take_first_two_chars() {
    assert_eq!(initials(Some("Mwila Phiri")), "Mw");
    assert_eq!(initials(Some("  Jo ")), "Jo");
}

#[test]
fn initials_default_for_missing_name() {
    assert_eq!(initials(None), "Un");
    assert_eq!(initials(Some("   ")), "Un");
}

#[test]
fn date_part_strips_time() {
    assert_eq!(date_part(Some("2024-03-09T10:22:01Z")), "2024-03-09");
    assert_eq!(date_part(Some("2024-03-09")), "2024-03-09");
    assert_eq!(date_part(None), "");
}

#[test]
fn display_or_falls_back_for_missing_or_blank() {
    assert_eq!(display_or(None, "No Contact"), "No Contact");
    assert_eq!(display_or(Some(""), "No Contact"), "No Contact");
    assert_eq!(display_or(Some("   "), "No Contact"), "No Contact");
}

#[test]
fn display_or_keeps_present_value() {
    assert_eq!(display_or(Some(" Zambeef "), "Untitled lead"), "Zambeef");
}
