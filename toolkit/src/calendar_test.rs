use time::macros::{date, datetime};

use super::*;

#[test]
fn fixed_clock_reports_millis_and_today() {
    let clock = FixedClock(datetime!(2025-03-05 10:30:00 UTC));
    assert_eq!(clock.today(), date!(2025 - 03 - 05));
    assert_eq!(clock.now_millis(), 1_741_170_600_000);
}

#[test]
fn from_unix_millis_round_trips_clock() {
    let now = from_unix_millis(1_741_170_600_000).unwrap();
    assert_eq!(now, datetime!(2025-03-05 10:30:00 UTC));
}

#[test]
fn iso_dates_format_and_parse() {
    assert_eq!(iso_date(date!(2025 - 01 - 09)), "2025-01-09");
    assert_eq!(parse_iso_date("2025-01-09"), Some(date!(2025 - 01 - 09)));
    assert_eq!(parse_iso_date("09.01.2025"), None);
    assert_eq!(parse_iso_date(""), None);
}

#[test]
fn upcoming_dates_start_tomorrow() {
    let dates = upcoming_dates(date!(2025 - 02 - 27), 3);
    assert_eq!(dates, vec![date!(2025 - 02 - 28), date!(2025 - 03 - 01), date!(2025 - 03 - 02)]);
}

#[test]
fn weekend_detection() {
    assert!(is_weekend(date!(2025 - 03 - 08)));
    assert!(is_weekend(date!(2025 - 03 - 09)));
    assert!(!is_weekend(date!(2025 - 03 - 10)));
}

#[test]
fn human_readable_dates() {
    assert_eq!(long_date(date!(2025 - 03 - 05)), "Wednesday, March 5, 2025");
    assert_eq!(short_weekday(date!(2025 - 03 - 05)), "Wed");
    assert_eq!(short_month(date!(2025 - 03 - 05)), "Mar");
}

#[test]
fn reference_code_keeps_leading_zeros() {
    assert_eq!(reference_code("TR", 1_741_170_012_345), "TR012345");
    assert_eq!(reference_code("SRV-", 1_741_170_600_000), "SRV-600000");
}

#[test]
fn add_days_moves_both_ways() {
    assert_eq!(add_days(date!(2025 - 03 - 01), 30), date!(2025 - 03 - 31));
    assert_eq!(add_days(date!(2025 - 03 - 01), -1), date!(2025 - 02 - 28));
}
