use super::*;

fn form(price: &str, term: &str) -> FinancingForm {
    FinancingForm { price: price.to_owned(), term: term.to_owned() }
}

#[test]
fn default_form_shows_twelve_month_installment() {
    let form = FinancingForm::default();
    assert_eq!(form.term(), 12);
    assert_eq!(form.display(), "CHF 291.67");
}

#[test]
fn monthly_payment_is_exact_division() {
    for term in TERMS {
        for price in [1000.0, 3500.0, 4999.0, 15000.0] {
            assert!((monthly_payment(price, term) - price / f64::from(term)).abs() < f64::EPSILON);
        }
    }
}

#[test]
fn unparsable_price_reads_as_zero() {
    assert_eq!(form("abc", "24").display(), "CHF 0.00");
    assert_eq!(form("", "24").display(), "CHF 0.00");
}

#[test]
fn unparsable_or_zero_term_reads_as_twelve() {
    assert_eq!(form("1200", "").term(), 12);
    assert_eq!(form("1200", "0").term(), 12);
    assert_eq!(form("1200", "-6").term(), 12);
    assert_eq!(form("1200", "36").display(), "CHF 33.33");
}

#[test]
fn price_bounds_are_not_enforced() {
    assert_eq!(form("600", "6").display(), "CHF 100.00");
}
