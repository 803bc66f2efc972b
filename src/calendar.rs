//! Business-day calendar arithmetic
//!
//! Weekdays (Monday through Friday) are business days; weekends are not.
//! There is no holiday calendar. Every function works on `NaiveDate`, so
//! there is no time-of-day to truncate once a value has been normalized.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, Weekday};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Check if a date falls on Monday through Friday
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Get the Monday of the Monday-to-Sunday week containing `date`
///
/// A Sunday belongs to the week that started on the preceding Monday.
pub fn start_of_business_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date - Duration::days(i64::from(offset))
}

/// Get the Monday and Friday bounding the business week containing `date`
pub fn business_week_range(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = start_of_business_week(date);
    (monday, monday + Duration::days(4))
}

/// Step forward `days` business days from `date`
///
/// Weekends are skipped while counting. With `days == 0` the date is
/// returned unchanged, even if it is a weekend.
pub fn add_business_days(date: NaiveDate, days: u32) -> NaiveDate {
    let mut current = date;
    let mut remaining = days;

    while remaining > 0 {
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
        if is_business_day(current) {
            remaining -= 1;
        }
    }

    current
}

/// Count business days after `start` up to and including `end`
///
/// `start` itself is never counted. Returns 0 when `start >= end`.
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if start >= end {
        return 0;
    }

    let count = start
        .iter_days()
        .skip(1)
        .take_while(|day| *day <= end)
        .filter(|day| is_business_day(*day))
        .count();

    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Count business days left in the month after `date`
///
/// `date` itself is excluded, so the last day of a month always yields 0.
pub fn business_days_remaining_in_month(date: NaiveDate) -> u32 {
    business_days_between(date, last_day_of_month(date))
}

/// Get the last calendar day of the month containing `date`
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

/// Get the first calendar day of the month after the one containing `date`
pub fn first_day_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    last_day_of_month(date).succ_opt()
}

/// Check if two dates fall in the same calendar month of the same year
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Parse a date or date-time string and keep only the calendar date
///
/// Accepted forms:
/// - `2024-06-03`
/// - `2024-06-03T14:30:00Z`, `2024-06-03T14:30:00+09:00` (date as written)
/// - `2024-06-03T14:30:00`, `2024-06-03 14:30:00.250`
///
/// Returns `None` for empty or unrecognized input.
pub fn normalize_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|datetime| datetime.date())
}
