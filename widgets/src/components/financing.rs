//! 0% financing calculator. The monthly payment follows the inputs live.

use leptos::prelude::*;
use toolkit::financing::{FinancingForm, MAX_PRICE, MIN_PRICE, TERMS};

use crate::registry;

#[component]
pub fn FinancingCalculator(form: FinancingForm) -> impl IntoView {
    let form = RwSignal::new(form);
    let field_class = registry::classes("field");
    let monthly = move || form.with(FinancingForm::display);

    view! {
        <div class="ebike-calculator ebike-calculator--financing">
            <div class=field_class.clone()>
                <label>"Bike Price (CHF)"</label>
                <input
                    type="number"
                    min=MIN_PRICE
                    max=MAX_PRICE
                    step="100"
                    prop:value=move || form.with(|f| f.price.clone())
                    on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                />
            </div>
            <div class=field_class>
                <label>"Financing Term"</label>
                <select
                    prop:value=move || form.with(|f| f.term.clone())
                    on:change=move |ev| form.update(|f| f.term = event_target_value(&ev))
                >
                    {TERMS
                        .into_iter()
                        .map(|months| view! { <option value=months>{format!("{months} months")}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="ebike-result">
                <span class="ebike-result__label">"Monthly Payment"</span>
                <div class="ebike-result__value">{monthly}</div>
                <p class="ebike-result__note">"0% interest, no hidden fees"</p>
            </div>
        </div>
    }
}
