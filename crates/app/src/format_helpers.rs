/// Shared formatting utilities for the UI layer.
///
/// The school API is loose about timestamps: complaints carry RFC 3339
/// strings, assignments a naive `YYYY-MM-DD HH:MM:SS`, attendance a plain
/// date. Everything that cannot be parsed is shown as-is.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%b %-d, %Y";

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(value.get(..10)?, "%Y-%m-%d").ok()
}

/// Format a date or timestamp as "Jan 20, 2026".
pub fn format_date_human(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => value.to_string(),
    }
}

/// "87.5%" style percentage; whole numbers drop the decimal.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Shorten long text for table cells, cutting on a char boundary.
pub fn truncate(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Today's date in the `YYYY-MM-DD` form date inputs use.
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_every_upstream_timestamp_shape() {
        assert_eq!(format_date_human("2024-03-05T10:15:00Z"), "Mar 5, 2024");
        assert_eq!(format_date_human("2024-03-05T10:15:00.123456"), "Mar 5, 2024");
        assert_eq!(format_date_human("2024-03-05 10:15:00"), "Mar 5, 2024");
        assert_eq!(format_date_human("2024-12-25"), "Dec 25, 2024");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date_human("tomorrow"), "tomorrow");
        assert_eq!(format_date_human(""), "");
    }

    #[test]
    fn percent_drops_trailing_zero() {
        assert_eq!(format_percent(100.0), "100%");
        assert_eq!(format_percent(66.67), "66.7%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("The projector is broken", 13), "The projector...");
        assert_eq!(truncate("नमस्ते दुनिया", 3), "नमस...");
    }
}
