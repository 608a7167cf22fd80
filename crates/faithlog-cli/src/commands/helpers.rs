//! Helper utility functions for CLI commands

use anyhow::{bail, Result};
use chrono::{NaiveDate, NaiveTime};

/// Truncate to `max_chars` characters (not bytes), marking the cut with `...`
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Escape a string for CSV format
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Parse `YYYY-MM-DD`
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => bail!("Invalid date '{s}'. Use YYYY-MM-DD"),
    }
}

/// Parse `HH:MM` or `HH:MM:SS`
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| anyhow::anyhow!("Invalid time '{s}'. Use HH:MM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_short() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_str_long() {
        assert_eq!(truncate_str("gracias a Dios", 7), "gracias...");
    }

    #[test]
    fn test_truncate_str_multibyte() {
        assert_eq!(truncate_str("oraci\u{f3}n respondida", 6), "oraci\u{f3}...");
    }

    #[test]
    fn test_escape_csv_plain() {
        assert_eq!(escape_csv("family"), "family");
    }

    #[test]
    fn test_escape_csv_comma_and_quotes() {
        assert_eq!(escape_csv("family, work"), "\"family, work\"");
        assert_eq!(escape_csv("said \"amen\""), "\"said \"\"amen\"\"\"");
    }

    #[test]
    fn test_escape_csv_newline() {
        assert_eq!(escape_csv("line one\nline two"), "\"line one\nline two\"");
    }

    #[test]
    fn test_parse_date_and_time() {
        assert_eq!(
            parse_date("2024-01-10").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
        assert!(parse_date("10/01/2024").is_err());
        assert_eq!(
            parse_time("07:30").unwrap(),
            NaiveTime::from_hms_opt(7, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("21:05:09").unwrap(),
            NaiveTime::from_hms_opt(21, 5, 9).unwrap()
        );
        assert!(parse_time("25:00").is_err());
    }
}
