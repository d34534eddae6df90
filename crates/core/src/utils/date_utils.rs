use chrono::{Datelike, Duration, NaiveDate};

use crate::constants::{START_DATE_HORIZON_MONTHS, START_DATE_LOOKBACK_DAYS};

/// Advances a date by a number of calendar months, clamping to the last
/// valid day of the target month.
///
/// This is the single source of truth for package end-date arithmetic:
/// `2025-01-31` plus one month is `2025-02-28`, not a fixed 30-day jump.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let total_month0 = date.year() * 12 + date.month0() as i32 + months as i32;
    let year = total_month0.div_euclid(12);
    let month = total_month0.rem_euclid(12) as u32 + 1;

    NaiveDate::from_ymd_opt(year, month, date.day())
        .unwrap_or_else(|| last_day_of_month(year, month))
}

/// Last valid day of the given month.
fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // The first of a month always exists, and so does its predecessor.
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .expect("month arithmetic stayed within chrono's date range")
}

/// Inclusive window of acceptable plan start dates relative to `today`:
/// `[today - 14 days, today + 6 months]`.
pub fn start_date_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (
        today - Duration::days(START_DATE_LOOKBACK_DAYS),
        add_months(today, START_DATE_HORIZON_MONTHS),
    )
}
