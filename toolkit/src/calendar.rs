//! Clock seam and date helpers shared by the booking wizards.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use time::macros::format_description;
use time::{Date, Duration, OffsetDateTime, Weekday};

use crate::error::ToolkitError;

/// Source of the current time.
///
/// The browser build reads `Date.now()`; tests pin a fixed instant.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;

    fn now_millis(&self) -> u64 {
        let millis = self.now().unix_timestamp_nanos() / 1_000_000;
        u64::try_from(millis).unwrap_or(0)
    }

    fn today(&self) -> Date {
        self.now().date()
    }
}

/// Clock frozen at one instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Convert a JavaScript millisecond timestamp.
pub fn from_unix_millis(millis: i64) -> Result<OffsetDateTime, ToolkitError> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
        .map_err(|e| ToolkitError::Validation(format!("timestamp out of range: {e}")))
}

/// `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Parse `YYYY-MM-DD`; `None` for anything else.
#[must_use]
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    match Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")) {
        Ok(date) => Some(date),
        Err(_) => None,
    }
}

/// `date` shifted by `days`, saturating at the calendar bounds.
#[must_use]
pub fn add_days(date: Date, days: i64) -> Date {
    date.checked_add(Duration::days(days)).unwrap_or(date)
}

#[must_use]
pub fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// `count` consecutive dates starting the day after `today`.
#[must_use]
pub fn upcoming_dates(today: Date, count: usize) -> Vec<Date> {
    std::iter::successors(today.next_day(), |date| date.next_day()).take(count).collect()
}

/// `Wednesday, March 5, 2025`.
#[must_use]
pub fn long_date(date: Date) -> String {
    format!("{}, {} {}, {}", date.weekday(), date.month(), date.day(), date.year())
}

/// `Wed`.
#[must_use]
pub fn short_weekday(date: Date) -> String {
    date.weekday().to_string().chars().take(3).collect()
}

/// `Mar`.
#[must_use]
pub fn short_month(date: Date) -> String {
    date.month().to_string().chars().take(3).collect()
}

/// Booking reference: `prefix` plus the last six digits of the timestamp.
#[must_use]
pub fn reference_code(prefix: &str, now_millis: u64) -> String {
    format!("{prefix}{:06}", now_millis % 1_000_000)
}

/// `HH:MM` wall clock time of `now`.
#[must_use]
pub fn clock_time(now: OffsetDateTime) -> String {
    format!("{:02}:{:02}", now.hour(), now.minute())
}
