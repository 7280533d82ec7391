use chrono::{DateTime, Utc};

pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        None
    } else {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}

/// Short display form, e.g. `Jan 5, 02:30 PM`. Unparseable input is shown as-is.
pub fn format_timestamp(value: &str) -> String {
    match parse_datetime(value) {
        Some(dt) => dt.format("%b %-d, %I:%M %p").to_string(),
        None => value.to_string(),
    }
}
