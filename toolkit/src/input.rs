//! Lenient parsing of raw form values.
//!
//! Form controls hand over strings. Numbers are read from the longest numeric
//! prefix (`"12.5kg"` reads as `12.5`), so a half-typed value still drives a
//! recompute. Anything without a numeric prefix is `None` and the caller
//! substitutes its default.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
    Ok(re) => Some(re),
    Err(_) => None,
});

/// Leading float, e.g. `" 3.5e2 CHF"` -> `350.0`.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }
    match text[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Leading integer, e.g. `"24 months"` -> `24`.
#[must_use]
pub fn parse_int(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    match text[..end].parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

/// Leading strictly positive integer.
#[must_use]
pub fn parse_count(raw: &str) -> Option<usize> {
    let value = parse_int(raw)?;
    if value <= 0 {
        return None;
    }
    match usize::try_from(value) {
        Ok(count) => Some(count),
        Err(_) => None,
    }
}

#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `local@domain.tld` shape check; no whitespace, exactly one `@` run.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(value))
}

/// `CHF 1234.50` style amount.
#[must_use]
pub fn format_chf(amount: f64) -> String {
    format!("CHF {amount:.2}")
}
