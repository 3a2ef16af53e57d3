//! Range calculator.
//!
//! Estimates are recomputed on every input change; an unknown bike model
//! shows the validation message in place of the results.

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;

use leptos::prelude::*;
use toolkit::catalog::RangeSpec;
use toolkit::range::{self, AssistLevel, RangeField, RangeForm, Terrain, Units, Weather};

use crate::registry;

/// `Trekking Sport X1 (625Wh)`.
pub fn bike_option_label(spec: &RangeSpec) -> String {
    format!("{} ({:.0}Wh)", spec.name, spec.battery_capacity)
}

/// `Rider Weight (kg)`.
pub fn field_label(label: &str, unit: &str) -> String {
    format!("{label} ({unit})")
}

#[component]
pub fn RangeCalculator(form: RangeForm, show_tips: bool) -> impl IntoView {
    let units = form.units;
    let form = RwSignal::new(form);
    let specs = StoredValue::new(
        registry::with_toolkit(|toolkit| toolkit.context().data.range_specs()).unwrap_or_default(),
    );
    let field_class = registry::classes("field");
    let estimate = move || specs.with_value(|specs| form.with(|f| range::estimate(f, specs)));

    let number_field = move |label: &'static str, field: RangeField, unit: &'static str| {
        let bounds = units.field(field);
        let read = move |f: &RangeForm| match field {
            RangeField::RiderWeight => f.rider_weight.clone(),
            RangeField::CargoWeight => f.cargo_weight.clone(),
            RangeField::Temperature => f.temperature.clone(),
            RangeField::Speed => f.speed.clone(),
        };
        view! {
            <div class=registry::classes("field")>
                <label>{field_label(label, unit)}</label>
                <input
                    type="number"
                    min=bounds.min
                    max=bounds.max
                    prop:value=move || form.with(read)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| match field {
                            RangeField::RiderWeight => f.rider_weight = value,
                            RangeField::CargoWeight => f.cargo_weight = value,
                            RangeField::Temperature => f.temperature = value,
                            RangeField::Speed => f.speed = value,
                        });
                    }
                />
            </div>
        }
    };

    view! {
        <div class="ebike-calculator ebike-calculator--range">
            <div class="ebike-form-row">
                <div class=field_class.clone()>
                    <label>"Bike Model"</label>
                    <select
                        prop:value=move || form.with(|f| f.bike.clone())
                        on:change=move |ev| form.update(|f| f.bike = event_target_value(&ev))
                    >
                        {specs
                            .get_value()
                            .into_iter()
                            .map(|spec| view! { <option value=spec.key.clone()>{bike_option_label(&spec)}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class=field_class.clone()>
                    <label>"Assist Level"</label>
                    <select
                        prop:value=move || form.with(|f| f.assist.as_str())
                        on:change=move |ev| {
                            if let Some(level) = AssistLevel::parse(&event_target_value(&ev)) {
                                form.update(|f| f.assist = level);
                            }
                        }
                    >
                        {AssistLevel::ALL
                            .into_iter()
                            .map(|level| view! { <option value=level.as_str()>{level.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>
            <div class="ebike-form-row">
                {number_field("Rider Weight", RangeField::RiderWeight, units.weight_label())}
                {number_field("Cargo Weight", RangeField::CargoWeight, units.weight_label())}
            </div>
            <div class="ebike-form-row">
                <div class=field_class.clone()>
                    <label>"Terrain Type"</label>
                    <select
                        prop:value=move || form.with(|f| f.terrain.as_str())
                        on:change=move |ev| {
                            if let Some(terrain) = Terrain::parse(&event_target_value(&ev)) {
                                form.update(|f| f.terrain = terrain);
                            }
                        }
                    >
                        {Terrain::ALL
                            .into_iter()
                            .map(|terrain| view! { <option value=terrain.as_str()>{terrain.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class=field_class>
                    <label>"Weather Conditions"</label>
                    <select
                        prop:value=move || form.with(|f| f.weather.as_str())
                        on:change=move |ev| {
                            if let Some(weather) = Weather::parse(&event_target_value(&ev)) {
                                form.update(|f| f.weather = weather);
                            }
                        }
                    >
                        {Weather::ALL
                            .into_iter()
                            .map(|weather| view! { <option value=weather.as_str()>{weather.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>
            <div class="ebike-form-row">
                {number_field("Temperature", RangeField::Temperature, units.temperature_label())}
                {number_field("Average Speed", RangeField::Speed, units.speed_label())}
            </div>

            <div class="ebike-result ebike-result--range">
                <h4>"Estimated Range"</h4>
                {move || match estimate() {
                    Ok(estimate) => {
                        let [conservative, realistic, optimistic] = estimate.display();
                        view! {
                            <div class="ebike-range-estimates">
                                <RangeFigure label="Conservative" value=conservative note="Worst case scenario" />
                                <RangeFigure label="Realistic" value=realistic note="Expected range" />
                                <RangeFigure label="Optimistic" value=optimistic note="Best case scenario" />
                            </div>
                            <div class="ebike-range-factors">
                                <h5>"Range Impact Factors"</h5>
                                {estimate
                                    .factors()
                                    .into_iter()
                                    .map(|(label, impact)| {
                                        view! {
                                            <div class="ebike-range-factor">
                                                <span class="ebike-range-factor__label">{format!("{label}:")}</span>
                                                <span class="ebike-range-factor__value">{impact}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                    Err(e) => view! { <p class="ebike-result__error">{e.to_string()}</p> }.into_any(),
                }}
            </div>

            {show_tips.then(|| view! { <RangeTips units=units /> })}
        </div>
    }
}

#[component]
fn RangeFigure(label: &'static str, value: String, note: &'static str) -> impl IntoView {
    view! {
        <div class="ebike-range-estimate">
            <div class="ebike-range-estimate__label">{label}</div>
            <div class="ebike-range-estimate__value">{value}</div>
            <div class="ebike-range-estimate__note">{note}</div>
        </div>
    }
}

#[component]
fn RangeTips(units: Units) -> impl IntoView {
    view! {
        <div class="ebike-range-tips">
            <h5>"💡 Range Optimization Tips"</h5>
            <div class="ebike-range-tips__grid">
                {range::tips(units).into_iter().map(|tip| view! { <div class="ebike-range-tip">{tip}</div> }).collect_view()}
            </div>
        </div>
    }
}
