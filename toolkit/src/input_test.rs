use super::*;

#[test]
fn parse_number_reads_numeric_prefix() {
    assert_eq!(parse_number("75"), Some(75.0));
    assert_eq!(parse_number(" 12.5kg"), Some(12.5));
    assert_eq!(parse_number("-4"), Some(-4.0));
    assert_eq!(parse_number(".5"), Some(0.5));
    assert_eq!(parse_number("3e2 CHF"), Some(300.0));
    assert_eq!(parse_number("2e"), Some(2.0));
}

#[test]
fn parse_number_rejects_non_numeric() {
    assert_eq!(parse_number(""), None);
    assert_eq!(parse_number("abc"), None);
    assert_eq!(parse_number("-"), None);
    assert_eq!(parse_number("."), None);
}

#[test]
fn parse_int_truncates_at_first_non_digit() {
    assert_eq!(parse_int("24 months"), Some(24));
    assert_eq!(parse_int("12.9"), Some(12));
    assert_eq!(parse_int("x12"), None);
}

#[test]
fn parse_count_requires_positive() {
    assert_eq!(parse_count("3"), Some(3));
    assert_eq!(parse_count("0"), None);
    assert_eq!(parse_count("-2"), None);
    assert_eq!(parse_count(""), None);
}

#[test]
fn email_shape() {
    assert!(is_valid_email("rider@example.ch"));
    assert!(!is_valid_email("rider@example"));
    assert!(!is_valid_email("rider example@x.ch"));
    assert!(!is_valid_email("@x.ch"));
}

#[test]
fn chf_formatting_uses_two_decimals() {
    assert_eq!(format_chf(291.666_666), "CHF 291.67");
    assert_eq!(format_chf(0.0), "CHF 0.00");
}
