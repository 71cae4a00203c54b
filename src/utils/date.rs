use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a user-supplied timestamp for `--at`.
///
/// Accepts `YYYY-MM-DD` (midnight local) or `YYYY-MM-DDTHH:MM`.
pub fn parse_datetime(s: &str) -> Option<DateTime<Local>> {
    let naive: NaiveDateTime = if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        dt
    } else {
        parse_date(s)?.and_hms_opt(0, 0, 0)?
    };
    Local.from_local_datetime(&naive).single()
}

/// Year-month bucket key ("YYYY-MM") for an RFC 3339 timestamp or a
/// plain `YYYY-MM-DD` date.
pub fn month_key(stamp: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(stamp) {
        return Some(dt.format("%Y-%m").to_string());
    }
    parse_date(stamp).map(|d| d.format("%Y-%m").to_string())
}

/// Human label ("Sep 2025") for a "YYYY-MM" bucket key.
pub fn month_label(key: &str) -> String {
    NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| key.to_string())
}
