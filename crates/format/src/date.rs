//! Date formatting.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d/%m/%Y";
const INPUT_FORMAT: &str = "%Y-%m-%d";

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, INPUT_FORMAT) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Render a calendar date as `DD/MM/YYYY`.
pub fn display_naive_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parse `YYYY-MM-DD` or RFC 3339 input and render it as `DD/MM/YYYY`.
///
/// Returns `None` when the input is not a recognisable date. Timestamps keep
/// the calendar date of their own offset; no timezone conversion happens.
pub fn display_date(value: &str) -> Option<String> {
    parse_date(value).map(display_naive_date)
}

/// Render a calendar date as `YYYY-MM-DD`, the value format of date inputs.
pub fn input_date(date: NaiveDate) -> String {
    date.format(INPUT_FORMAT).to_string()
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today_input_value() -> String {
    input_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_plain_dates() {
        assert_eq!(display_date("2024-03-09").as_deref(), Some("09/03/2024"));
    }

    #[test]
    fn displays_timestamps_using_their_own_calendar_date() {
        assert_eq!(
            display_date("2024-12-31T23:30:00-03:00").as_deref(),
            Some("31/12/2024")
        );
        assert_eq!(
            display_date("2024-01-02T10:00:00").as_deref(),
            Some("02/01/2024")
        );
    }

    #[test]
    fn unparseable_input_yields_none() {
        assert_eq!(display_date(""), None);
        assert_eq!(display_date("31/12/2024"), None);
        assert_eq!(display_date("2024-02-30"), None);
    }

    #[test]
    fn input_date_is_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(input_date(date), "2025-07-04");
        assert_eq!(display_naive_date(date), "04/07/2025");
    }

    #[test]
    fn today_is_parseable_back() {
        let today = today_input_value();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, INPUT_FORMAT).is_ok());
    }
}
