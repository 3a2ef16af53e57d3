//! Frame size calculator.

use leptos::prelude::*;
use toolkit::sizing::{BikeType, MAX_HEIGHT_CM, MIN_HEIGHT_CM, SizeRecommendation, SizingForm};

use super::NoticeBar;
use crate::registry;
use crate::util::notify::{self, Notice};

#[component]
pub fn SizeCalculator(form: SizingForm) -> impl IntoView {
    let form = RwSignal::new(form);
    let result = RwSignal::new(None::<SizeRecommendation>);
    let notice = RwSignal::new(None::<Notice>);
    let field_class = registry::classes("field");
    let button_class = registry::classes("buttonPrimary");

    let on_calculate = move |_| match form.with_untracked(SizingForm::recommend) {
        Ok(recommendation) => {
            tracing::debug!(frame_size = %recommendation.frame_size, "size recommended");
            result.set(Some(recommendation));
        }
        Err(e) => notify::error(notice, &e),
    };

    view! {
        <div class="ebike-calculator ebike-calculator--sizing">
            <div class=field_class.clone()>
                <label>"Height (cm)"</label>
                <input
                    type="number"
                    min=MIN_HEIGHT_CM
                    max=MAX_HEIGHT_CM
                    placeholder="175"
                    prop:value=move || form.with(|f| f.height.clone())
                    on:input=move |ev| form.update(|f| f.height = event_target_value(&ev))
                />
            </div>
            <div class=field_class.clone()>
                <label>"Inseam (cm)"</label>
                <input
                    type="number"
                    min="50"
                    max="120"
                    placeholder="80"
                    prop:value=move || form.with(|f| f.inseam.clone())
                    on:input=move |ev| form.update(|f| f.inseam = event_target_value(&ev))
                />
            </div>
            <div class=field_class>
                <label>"Bike Type"</label>
                <select
                    prop:value=move || form.with(|f| f.bike_type.as_str())
                    on:change=move |ev| form.update(|f| f.bike_type = BikeType::parse(&event_target_value(&ev)))
                >
                    {BikeType::ALL
                        .into_iter()
                        .map(|bike_type| view! { <option value=bike_type.as_str()>{bike_type.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <button class=button_class on:click=on_calculate>
                "Calculate Size"
            </button>
            <NoticeBar notice=notice />
            {move || {
                result
                    .get()
                    .map(|recommendation| {
                        view! {
                            <div class="ebike-result">
                                <h4>"Recommended Frame Size"</h4>
                                <div class="ebike-result__value">{recommendation.frame_size}</div>
                                <p class="ebike-result__advice">{recommendation.advice}</p>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
