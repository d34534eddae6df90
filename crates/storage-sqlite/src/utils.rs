//! Conversion helpers between SQLite TEXT columns and domain types.
//!
//! Money is stored as decimal strings to avoid float drift; dates and
//! timestamps as ISO-8601 strings. Every DB model conversion funnels
//! through these helpers so the formats stay consistent.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;

use gymtrack_core::errors::{Error, Result, ValidationError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    Decimal::from_str(s).map_err(|e| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "Invalid decimal value '{s}': {e}"
        )))
    })
}

pub fn format_decimal(d: Decimal) -> String {
    d.to_string()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, DATE_FORMAT)?)
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)?)
}

pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

pub fn parse_time(s: &str) -> Result<NaiveTime> {
    Ok(NaiveTime::parse_from_str(s, TIME_FORMAT)?)
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// Fitness goals are stored as a JSON array in a single TEXT column.
pub fn parse_string_list(s: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(s)?)
}

pub fn format_string_list(items: &[String]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decimal_round_trip_keeps_scale() {
        let d = dec!(10000.50);
        assert_eq!(format_decimal(d), "10000.50");
        assert_eq!(parse_decimal("10000.50").unwrap(), d);
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert!(parse_decimal("ten").is_err());
        assert!(parse_decimal("").is_err());
    }

    #[test]
    fn test_date_round_trip() {
        let d = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        assert_eq!(format_date(d), "2026-02-28");
        assert_eq!(parse_date("2026-02-28").unwrap(), d);
    }

    #[test]
    fn test_datetime_round_trip() {
        let dt = NaiveDate::from_ymd_opt(2026, 8, 27)
            .unwrap()
            .and_hms_milli_opt(9, 30, 15, 250)
            .unwrap();
        assert_eq!(parse_datetime(&format_datetime(dt)).unwrap(), dt);
    }

    #[test]
    fn test_string_list_round_trip() {
        let goals = vec!["WEIGHT_LOSS".to_string(), "STRENGTH".to_string()];
        let stored = format_string_list(&goals).unwrap();
        assert_eq!(parse_string_list(&stored).unwrap(), goals);
    }
}
