//! Display formatting for lead cards and tables.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Whole-kwacha amount with thousands separators, e.g. `12,500`.
///
/// Fractions are rounded; negative and non-finite values render as `0`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() || value <= 0.0 {
        return "0".to_owned();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = value.round() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Avatar initials for an assignee name, `Un` when unassigned.
pub fn initials(name: Option<&str>) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(n) => n.chars().take(2).collect(),
        None => "Un".to_owned(),
    }
}

/// Date part (`YYYY-MM-DD`) of an ISO 8601 timestamp.
pub fn date_part(timestamp: Option<&str>) -> &str {
    timestamp
        .map(|ts| ts.split_once('T').map_or(ts, |(date, _)| date))
        .unwrap_or("")
}

/// `value` trimmed, or `fallback` when it is missing or blank.
pub fn display_or(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}
