//! Test ride booking wizard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Four steps: location, date and time, rider details, confirmation. Picking
//! a date starts a simulated availability lookup; the result lands after
//! [`SLOT_LOAD_DELAY_MS`] unless another date was picked meanwhile.

#[cfg(test)]
#[path = "test_ride_test.rs"]
mod test_ride_test;

use leptos::prelude::*;
use toolkit::booking::test_ride::{
    BIKE_PREFERENCES, Experience, NO_SLOTS_MESSAGE, SLOT_LOAD_DELAY_MS, STEP_LABELS, Slots, TestRideWizard,
};
use toolkit::booking::wizard::Advance;
use toolkit::calendar;

use super::{NoticeBar, StepIndicator, SummaryRow, TextField, finish_booking};
use crate::registry;
use crate::util::notify::{self, Notice};
use crate::util::timer;

/// Placeholder shown in the time grid instead of slot buttons.
pub fn slots_message(slots: &Slots) -> Option<&'static str> {
    match slots {
        Slots::NoDate => Some("Please select a date first."),
        Slots::Loading(_) => Some("Loading available times..."),
        Slots::Ready(slots) if slots.is_empty() => Some(NO_SLOTS_MESSAGE),
        Slots::Ready(_) => None,
    }
}

pub fn slot_class(selected: bool) -> &'static str {
    if selected { "ebike-slot ebike-slot--selected" } else { "ebike-slot" }
}

#[component]
pub fn TestRideBooking(wizard: TestRideWizard) -> impl IntoView {
    let wizard = RwSignal::new(wizard);
    let notice = RwSignal::new(None::<Notice>);
    let today = registry::now().date();
    let (min_date, max_date) = TestRideWizard::date_bounds(today);
    let primary = StoredValue::new(registry::classes("buttonPrimary"));
    let secondary = StoredValue::new(registry::classes("buttonSecondary"));

    let step = move || wizard.with(|w| w.steps().step());
    let steps = Signal::derive(move || wizard.with(|w| *w.steps()));

    let on_date = move |raw: String| match wizard.try_update(|w| w.pick_date(&raw, today)) {
        Some(Ok(date)) => timer::after(SLOT_LOAD_DELAY_MS, move || {
            let mut rng = registry::fork_rng();
            wizard.try_update(|w| w.finish_loading(date, &mut rng));
        }),
        Some(Err(e)) => notify::error(notice, &e),
        None => {}
    };

    let on_next = move |_| {
        let advanced = wizard.try_update(|w| match w.next()? {
            Advance::ReadyToSubmit => w.begin_submit().map(|()| Advance::ReadyToSubmit),
            moved => Ok(moved),
        });
        match advanced {
            Some(Ok(Advance::ReadyToSubmit)) => finish_booking(wizard, notice, TestRideWizard::complete_submit),
            Some(Ok(Advance::Moved(step))) => tracing::debug!(step, "test ride step"),
            Some(Err(e)) => notify::error(notice, &e),
            None => {}
        }
    };

    let on_previous = move |_| {
        wizard.update(|w| {
            w.previous();
        });
    };

    let location_step = move || {
        wizard.with(|w| {
            let selected = w.location().map(|location| location.key.clone());
            w.locations()
                .iter()
                .map(|location| {
                    let key = location.key.clone();
                    let value = key.clone();
                    let checked = selected.as_deref() == Some(key.as_str());
                    view! {
                        <label class="ebike-option-card" class:ebike-option-card--selected=checked>
                            <input
                                type="radio"
                                name="test-ride-location"
                                value=value
                                prop:checked=checked
                                on:change=move |_| {
                                    let key = key.clone();
                                    wizard.update(|w| {
                                        if let Err(e) = w.select_location(&key) {
                                            tracing::warn!(error = %e, "unknown test ride location");
                                        }
                                    });
                                }
                            />
                            <span class="ebike-option-card__title">{location.name.clone()}</span>
                            <span class="ebike-option-card__detail">{location.address.clone()}</span>
                            {location
                                .phone
                                .clone()
                                .map(|phone| view! { <span class="ebike-option-card__detail">{phone}</span> })}
                        </label>
                    }
                })
                .collect_view()
        })
    };

    let time_grid = move || {
        wizard.with(|w| {
            if let Some(message) = slots_message(w.slots()) {
                return view! { <p class="ebike-slots__message">{message}</p> }.into_any();
            }
            let Slots::Ready(slots) = w.slots() else {
                return ().into_any();
            };
            let chosen = w.time().map(str::to_owned);
            slots
                .iter()
                .map(|slot| {
                    let value = slot.clone();
                    let selected = chosen.as_deref() == Some(slot.as_str());
                    view! {
                        <button
                            type="button"
                            class=slot_class(selected)
                            on:click=move |_| {
                                let value = value.clone();
                                wizard.update(|w| {
                                    if let Err(e) = w.select_time(&value) {
                                        tracing::warn!(error = %e, "stale time slot");
                                    }
                                });
                            }
                        >
                            {slot.clone()}
                        </button>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    let details_step = move || {
        view! {
            <TextField
                label="Full Name *"
                value=Signal::derive(move || wizard.with(|w| w.details.name.clone()))
                on_input=Callback::new(move |v| wizard.update(|w| w.details.name = v))
            />
            <TextField
                label="Email *"
                input_type="email"
                value=Signal::derive(move || wizard.with(|w| w.details.email.clone()))
                on_input=Callback::new(move |v| wizard.update(|w| w.details.email = v))
            />
            <TextField
                label="Phone *"
                input_type="tel"
                value=Signal::derive(move || wizard.with(|w| w.details.phone.clone()))
                on_input=Callback::new(move |v| wizard.update(|w| w.details.phone = v))
            />
            <div class=registry::classes("field")>
                <label>"Bike Preference"</label>
                <select
                    prop:value=move || wizard.with(|w| w.details.bike_preference.clone())
                    on:change=move |ev| wizard.update(|w| w.details.bike_preference = event_target_value(&ev))
                >
                    {BIKE_PREFERENCES
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class=registry::classes("field")>
                <label>"Riding Experience"</label>
                <select
                    prop:value=move || wizard.with(|w| w.details.experience.as_str())
                    on:change=move |ev| wizard.update(|w| w.details.experience = Experience::parse(&event_target_value(&ev)))
                >
                    {Experience::ALL
                        .into_iter()
                        .map(|level| view! { <option value=level.as_str()>{level.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class=registry::classes("field")>
                <label>"Special Requests"</label>
                <textarea
                    prop:value=move || wizard.with(|w| w.details.special_requests.clone())
                    on:input=move |ev| wizard.update(|w| w.details.special_requests = event_target_value(&ev))
                ></textarea>
            </div>
        }
    };

    let summary_step = move || {
        let summary = wizard.with(TestRideWizard::summary);
        view! {
            <div class="ebike-summary">
                <SummaryRow label="Location" value=format!("{} ({})", summary.location_name, summary.location_address) />
                <SummaryRow label="Date" value=summary.date />
                <SummaryRow label="Time" value=summary.time />
                <SummaryRow label="Name" value=summary.name />
                <SummaryRow label="Email" value=summary.email />
                <SummaryRow label="Phone" value=summary.phone />
                <SummaryRow label="Bike Preference" value=summary.bike_preference />
                <SummaryRow label="Experience" value=summary.experience />
                {summary.special_requests.map(|requests| view! { <SummaryRow label="Special Requests" value=requests /> })}
            </div>
        }
    };

    let body = move || match step() {
        1 => view! { <div class="ebike-option-grid">{location_step}</div> }.into_any(),
        2 => view! {
            <div class=registry::classes("field")>
                <label>"Preferred Date"</label>
                <input
                    type="date"
                    min=calendar::iso_date(min_date)
                    max=calendar::iso_date(max_date)
                    prop:value=move || wizard.with(|w| w.date().map(calendar::iso_date).unwrap_or_default())
                    on:change=move |ev| on_date(event_target_value(&ev))
                />
            </div>
            <div class="ebike-slots">{time_grid}</div>
        }
        .into_any(),
        3 => details_step().into_any(),
        _ => summary_step().into_any(),
    };

    let confirmation = move || wizard.with(|w| w.submission().reference().map(str::to_owned));
    let submitting = move || wizard.with(|w| !w.submission().is_editing());

    view! {
        <div class="ebike-booking ebike-booking--test-ride">
            <NoticeBar notice=notice />
            {move || match confirmation() {
                Some(reference) => view! {
                    <div class="ebike-confirmation">
                        <h4>"🎉 Test Ride Booked!"</h4>
                        <p>"We've sent a confirmation email with all the details."</p>
                        <p class="ebike-confirmation__reference">{format!("Booking reference: {reference}")}</p>
                    </div>
                }
                .into_any(),
                None => view! {
                    <StepIndicator steps=steps labels=&STEP_LABELS />
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
                                (4, false) => "Book Test Ride",
                                _ => "Next",
                            }}
                        </button>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
