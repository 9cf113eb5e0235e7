//! Calendar helpers for billing periods.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// First day of the month containing `date`.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.checked_sub_days(Days::new(1)))
        .unwrap_or(date)
}

pub fn is_first_day_of_month(date: NaiveDate) -> bool {
    date.day() == 1
}

/// Adds (or subtracts, when negative) a number of business days,
/// skipping Saturdays and Sundays.
pub fn add_business_days(date: NaiveDate, days: i64) -> NaiveDate {
    let step = if days >= 0 { 1 } else { -1 };
    let mut remaining = days.abs();
    let mut current = date;

    while remaining > 0 {
        current = if step > 0 {
            current.succ_opt().unwrap_or(current)
        } else {
            current.pred_opt().unwrap_or(current)
        };
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            remaining -= 1;
        }
    }

    current
}
