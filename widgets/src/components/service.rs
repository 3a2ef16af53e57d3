//! Service booking wizard.
//!
//! Package and extras, then location, date and time, then customer details,
//! then a priced summary. `Next` on the summary step submits.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use leptos::prelude::*;
use time::Date;
use toolkit::booking::service::{self, AddOn, STEP_TITLES, ServiceWizard};
use toolkit::booking::wizard::Advance;
use toolkit::calendar;

use super::{NoticeBar, StepIndicator, SummaryRow, TextField, finish_booking};
use crate::registry;
use crate::util::notify::{self, Notice};

/// `Wed 5 Mar`.
pub fn date_label(date: Date) -> String {
    format!("{} {} {}", calendar::short_weekday(date), date.day(), calendar::short_month(date))
}

/// `CHF 149 · 90 min`.
pub fn package_meta(price: u32, minutes: u32) -> String {
    format!("CHF {price} · {minutes} min")
}

#[component]
pub fn ServiceBooking(wizard: ServiceWizard) -> impl IntoView {
    let wizard = RwSignal::new(wizard);
    let notice = RwSignal::new(None::<Notice>);
    let today = registry::now().date();
    let primary = StoredValue::new(registry::classes("buttonPrimary"));
    let secondary = StoredValue::new(registry::classes("buttonSecondary"));

    let step = move || wizard.with(|w| w.steps().step());
    let steps = Signal::derive(move || wizard.with(|w| *w.steps()));

    let report = move |result: Result<(), toolkit::ToolkitError>| {
        if let Err(e) = result {
            notify::error(notice, &e);
        }
    };

    let on_next = move |_| match wizard.try_update(ServiceWizard::next) {
        Some(Ok(Advance::ReadyToSubmit)) => finish_booking(wizard, notice, ServiceWizard::complete_submit),
        Some(Ok(Advance::Moved(step))) => tracing::debug!(step, "service step"),
        Some(Err(e)) => notify::error(notice, &e),
        None => {}
    };

    let on_previous = move |_| {
        wizard.update(|w| {
            w.previous();
        });
    };

    let package_step = move || {
        wizard.with(|w| {
            let selected = w.package().map(|package| package.key.clone());
            let packages = w
                .packages()
                .iter()
                .map(|package| {
                    let key = package.key.clone();
                    let checked = selected.as_deref() == Some(package.key.as_str());
                    view! {
                        <label class="ebike-option-card" class:ebike-option-card--selected=checked>
                            <input
                                type="radio"
                                name="service-package"
                                prop:checked=checked
                                on:change=move |_| {
                                    let key = key.clone();
                                    report(wizard.try_update(|w| w.select_package(&key)).unwrap_or(Ok(())));
                                }
                            />
                            <span class="ebike-option-card__title">{package.name.clone()}</span>
                            <span class="ebike-option-card__meta">{package_meta(package.price, package.duration)}</span>
                            <p class="ebike-option-card__detail">{package.description.clone()}</p>
                            <ul class="ebike-option-card__list">
                                {package.included.iter().map(|item| view! { <li>{item.clone()}</li> }).collect_view()}
                            </ul>
                        </label>
                    }
                })
                .collect_view();
            let chosen = w.add_ons().to_vec();
            let add_ons = AddOn::ALL
                .into_iter()
                .map(|add_on| {
                    view! {
                        <label class="ebike-checkbox">
                            <input
                                type="checkbox"
                                value=add_on.key()
                                prop:checked=chosen.contains(&add_on)
                                on:change=move |ev| wizard.update(|w| w.toggle_add_on(add_on, event_target_checked(&ev)))
                            />
                            {add_on.label()}
                        </label>
                    }
                })
                .collect_view();
            view! {
                <div class="ebike-option-grid">{packages}</div>
                <h5>"Additional Services"</h5>
                <div class="ebike-checkbox-group">{add_ons}</div>
            }
        })
    };

    let schedule_step = move || {
        wizard.with(|w| {
            let location_key = w.location().map(|location| location.key.clone());
            let locations = w
                .available_locations()
                .into_iter()
                .map(|location| {
                    let key = location.key.clone();
                    let checked = location_key.as_deref() == Some(location.key.as_str());
                    view! {
                        <label class="ebike-option-card" class:ebike-option-card--selected=checked>
                            <input
                                type="radio"
                                name="service-location"
                                prop:checked=checked
                                on:change=move |_| {
                                    let key = key.clone();
                                    report(wizard.try_update(|w| w.select_location(&key)).unwrap_or(Ok(())));
                                }
                            />
                            <span class="ebike-option-card__title">{location.name.clone()}</span>
                            <span class="ebike-option-card__detail">{location.address.clone()}</span>
                            <span class="ebike-option-card__detail">{location.hours.clone()}</span>
                        </label>
                    }
                })
                .collect_view();
            let chosen_date = w.date();
            let dates = ServiceWizard::dates(today)
                .into_iter()
                .map(|date| {
                    view! {
                        <button
                            type="button"
                            class=super::test_ride::slot_class(chosen_date == Some(date))
                            on:click=move |_| report(wizard.try_update(|w| w.select_date(date, today)).unwrap_or(Ok(())))
                        >
                            {date_label(date)}
                        </button>
                    }
                })
                .collect_view();
            view! {
                <h5>"Location"</h5>
                <div class="ebike-option-grid">{locations}</div>
                <h5>"Date"</h5>
                <div class="ebike-date-grid">{dates}</div>
                <div class=registry::classes("field")>
                    <label>"Time"</label>
                    <select
                        prop:value=move || wizard.with(|w| w.time().unwrap_or_default().to_owned())
                        on:change=move |ev| {
                            let slot = event_target_value(&ev);
                            report(wizard.try_update(|w| w.select_time(&slot)).unwrap_or(Ok(())));
                        }
                    >
                        <option value="">"Select a time"</option>
                        {service::time_slots()
                            .into_iter()
                            .map(|slot| {
                                let value = slot.clone();
                                view! { <option value=value>{slot}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
            }
        })
    };

    let customer_step = move || {
        view! {
            <div class="ebike-form-row">
                <TextField
                    label="First Name *"
                    value=Signal::derive(move || wizard.with(|w| w.customer.first_name.clone()))
                    on_input=Callback::new(move |v| wizard.update(|w| w.customer.first_name = v))
                />
                <TextField
                    label="Last Name *"
                    value=Signal::derive(move || wizard.with(|w| w.customer.last_name.clone()))
                    on_input=Callback::new(move |v| wizard.update(|w| w.customer.last_name = v))
                />
            </div>
            <div class="ebike-form-row">
                <TextField
                    label="Email *"
                    input_type="email"
                    value=Signal::derive(move || wizard.with(|w| w.customer.email.clone()))
                    on_input=Callback::new(move |v| wizard.update(|w| w.customer.email = v))
                />
                <TextField
                    label="Phone *"
                    input_type="tel"
                    value=Signal::derive(move || wizard.with(|w| w.customer.phone.clone()))
                    on_input=Callback::new(move |v| wizard.update(|w| w.customer.phone = v))
                />
            </div>
            <div class="ebike-form-row">
                <TextField
                    label="Bike Model"
                    value=Signal::derive(move || wizard.with(|w| w.customer.bike_model.clone()))
                    on_input=Callback::new(move |v| wizard.update(|w| w.customer.bike_model = v))
                />
                <TextField
                    label="Purchase Date"
                    input_type="date"
                    value=Signal::derive(move || wizard.with(|w| w.customer.purchase_date.clone()))
                    on_input=Callback::new(move |v| wizard.update(|w| w.customer.purchase_date = v))
                />
            </div>
            <div class=registry::classes("field")>
                <label>"Describe any issues"</label>
                <textarea
                    prop:value=move || wizard.with(|w| w.customer.issues.clone())
                    on:input=move |ev| wizard.update(|w| w.customer.issues = event_target_value(&ev))
                ></textarea>
            </div>
            <label class="ebike-checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || wizard.with(|w| w.customer.newsletter)
                    on:change=move |ev| wizard.update(|w| w.customer.newsletter = event_target_checked(&ev))
                />
                "Subscribe to maintenance tips and offers"
            </label>
        }
    };

    let summary_step = move || {
        let summary = wizard.with(ServiceWizard::summary);
        view! {
            <div class="ebike-summary">
                <SummaryRow label="Service" value=format!("{} (CHF {})", summary.package_name, summary.package_price) />
                <SummaryRow label="Duration" value=format!("{} min", summary.duration_minutes) />
                {summary
                    .add_ons
                    .into_iter()
                    .map(|(name, price)| view! { <SummaryRow label="Add-on" value=format!("{name} (+CHF {price})") /> })
                    .collect_view()}
                <SummaryRow label="Location" value=format!("{}, {}", summary.location_name, summary.location_address) />
                <SummaryRow label="Location Phone" value=summary.location_phone />
                <SummaryRow label="Date" value=summary.date />
                <SummaryRow label="Time" value=summary.time />
                <SummaryRow label="Customer" value=summary.customer_name />
                <SummaryRow label="Email" value=summary.email />
                <SummaryRow label="Phone" value=summary.phone />
                {summary.bike_model.map(|model| view! { <SummaryRow label="Bike" value=model /> })}
                <div class="ebike-summary__total">{format!("Total: CHF {}", summary.total_price)}</div>
            </div>
            <label class="ebike-checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || wizard.with(|w| w.terms_accepted)
                    on:change=move |ev| wizard.update(|w| w.terms_accepted = event_target_checked(&ev))
                />
                "I accept the terms and conditions *"
            </label>
        }
    };

    let body = move || match step() {
        1 => package_step().into_any(),
        2 => schedule_step().into_any(),
        3 => customer_step().into_any(),
        _ => summary_step().into_any(),
    };

    let confirmation = move || wizard.with(|w| w.submission().reference().map(str::to_owned));
    let submitting = move || wizard.with(|w| !w.submission().is_editing());

    view! {
        <div class="ebike-booking ebike-booking--service">
            <NoticeBar notice=notice />
            {move || match confirmation() {
                Some(reference) => view! {
                    <div class="ebike-confirmation">
                        <h4>"✅ Service Booked!"</h4>
                        <p>"A confirmation email is on its way."</p>
                        <p class="ebike-confirmation__reference">{format!("Booking reference: {reference}")}</p>
                    </div>
                }
                .into_any(),
                None => view! {
                    <StepIndicator steps=steps labels=&STEP_TITLES />
                    <div class="ebike-booking__step">{body}</div>
                    <div class="ebike-booking__nav">
                        <Show when=move || { step() > 1 }>
                            <button type="button" class=move || secondary.get_value() on:click=on_previous>
                                "Previous"
                            </button>
                        </Show>
                        <button type="button" class=move || primary.get_value() disabled=submitting on:click=on_next>
                            {move || match (step(), submitting()) {
                                (_, true) => "Booking...",
                                (4, false) => "Confirm Booking",
                                _ => "Next",
                            }}
                        </button>
                        <span class="ebike-booking__total">
                            {move || format!("Total: CHF {}", wizard.with(ServiceWizard::total_price))}
                        </span>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
