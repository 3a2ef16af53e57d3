//! Interest-free financing calculator.

#[cfg(test)]
#[path = "financing_test.rs"]
mod financing_test;

use crate::input;

/// Selectable terms in months.
pub const TERMS: [u32; 5] = [6, 12, 18, 24, 36];

pub const DEFAULT_PRICE: &str = "3500";
pub const DEFAULT_TERM: u32 = 12;

/// Bounds declared on the price input; the calculation does not enforce them.
pub const MIN_PRICE: u32 = 1000;
pub const MAX_PRICE: u32 = 15000;

/// Monthly installment at 0% interest.
#[must_use]
pub fn monthly_payment(price: f64, term_months: u32) -> f64 {
    price / f64::from(term_months)
}

/// Raw form values of one financing calculator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinancingForm {
    pub price: String,
    pub term: String,
}

impl Default for FinancingForm {
    fn default() -> Self {
        Self { price: DEFAULT_PRICE.to_owned(), term: DEFAULT_TERM.to_string() }
    }
}

impl FinancingForm {
    /// Unparsable price reads as 0.
    #[must_use]
    pub fn price(&self) -> f64 {
        input::parse_number(&self.price).unwrap_or(0.0)
    }

    /// Unparsable, zero or negative term reads as 12.
    #[must_use]
    pub fn term(&self) -> u32 {
        match input::parse_int(&self.term).map(u32::try_from) {
            Some(Ok(term)) if term > 0 => term,
            _ => DEFAULT_TERM,
        }
    }

    #[must_use]
    pub fn monthly(&self) -> f64 {
        monthly_payment(self.price(), self.term())
    }

    /// `CHF 291.67`.
    #[must_use]
    pub fn display(&self) -> String {
        input::format_chf(self.monthly())
    }
}
