//! Tool widgets and the shared chrome they render inside.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ToolWidget`] is the root view mounted into each container. It renders
//! the instance header and hands the instance state to the tool component,
//! which seeds its own signals from it and owns every later change.
//!
//! DESIGN
//! ======
//! Components keep toolkit state types in `RwSignal`s and call the core's
//! methods inside `update`, so validation and formatting stay host-testable.
//! Only the wishlist reads through the registry, since its list is shared by
//! every instance on the page.


pub mod blog;
pub mod comparison;
pub mod dashboard;
pub mod financing;
pub mod range;
pub mod service;
pub mod sizing;
pub mod test_ride;
pub mod wishlist;

use leptos::prelude::*;
use toolkit::ToolkitError;
use toolkit::booking::wizard::{StepMachine, StepStatus};
use toolkit::booking::{BookingBackend, SUBMIT_DELAY_MS, SimulatedBackend};
use toolkit::module::{ToolInstance, ToolKind, ToolState};

use crate::registry;
use crate::util::notify::{self, Notice};
use crate::util::timer;

/// Root class list of a tool's shell.
pub fn shell_class(kind: ToolKind) -> String {
    format!("ebike-tool ebike-tool--{}", kind.tool_name())
}

/// Class of one step in a wizard's progress indicator.
pub fn step_class(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Completed => "ebike-step ebike-step--completed",
        StepStatus::Active => "ebike-step ebike-step--active",
        StepStatus::Pending => "ebike-step",
    }
}

/// Root view of one mounted instance.
#[component]
pub fn ToolWidget(instance: ToolInstance) -> impl IntoView {
    let ToolInstance { id, kind, settings, state } = instance;
    let title = settings.title_for(kind);
    let subtitle = settings.subtitle_for(kind);

    let body = match state {
        ToolState::Sizing(form) => view! { <sizing::SizeCalculator form=form /> }.into_any(),
        ToolState::Financing(form) => view! { <financing::FinancingCalculator form=form /> }.into_any(),
        ToolState::Wishlist => view! { <wishlist::WishlistPanel /> }.into_any(),
        ToolState::Range(form) => {
            view! { <range::RangeCalculator form=form show_tips=settings.show_tips /> }.into_any()
        }
        ToolState::TestRide(wizard) => view! { <test_ride::TestRideBooking wizard=*wizard /> }.into_any(),
        ToolState::Service(wizard) => view! { <service::ServiceBooking wizard=*wizard /> }.into_any(),
        ToolState::Comparison(selection) => view! { <comparison::ComparisonTool selection=selection /> }.into_any(),
        ToolState::Dashboard(state) => view! { <dashboard::VendorDashboard state=*state /> }.into_any(),
        ToolState::Blog(state) => view! { <blog::BlogGenerator state=*state /> }.into_any(),
    };

    view! {
        <div class=shell_class(kind) data-instance-id=id>
            <div class="ebike-tool__header">
                <h3 class="ebike-tool__title">{title}</h3>
                {(!subtitle.is_empty()).then(|| view! { <p class="ebike-tool__subtitle">{subtitle}</p> })}
            </div>
            <div class="ebike-tool__body">{body}</div>
        </div>
    }
}

/// Transient notification slot shared by every tool.
#[component]
pub fn NoticeBar(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let class = notice.class();
            view! {
                <div class=class role="status">
                    <span class="ebike-notification__message">{notice.message}</span>
                </div>
            }
        })
    }
}

/// Numbered progress markers for a booking wizard.
#[component]
pub fn StepIndicator(#[prop(into)] steps: Signal<StepMachine>, labels: &'static [&'static str]) -> impl IntoView {
    view! {
        <ol class="ebike-steps">
            {labels
                .iter()
                .zip(1u8..)
                .map(|(label, n)| {
                    view! {
                        <li class=move || step_class(steps.get().status(n))>
                            <span class="ebike-step__number">{n}</span>
                            <span class="ebike-step__label">{*label}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

/// Complete a started submission after the simulated delay and report the
/// outcome. A wizard unmounted in the meantime is left alone.
fn finish_booking<W>(
    wizard: RwSignal<W>,
    notice: RwSignal<Option<Notice>>,
    complete: fn(&mut W, &dyn BookingBackend, u64) -> Result<String, ToolkitError>,
) where
    W: Send + Sync + 'static,
{
    timer::after(SUBMIT_DELAY_MS, move || {
        let now = registry::now_millis();
        match wizard.try_update(|w| complete(w, &SimulatedBackend, now)) {
            Some(Ok(reference)) => tracing::info!(reference = %reference, "booking shown as confirmed"),
            Some(Err(e)) => notify::error(notice, &e),
            None => tracing::debug!("booking completed after unmount"),
        }
    });
}

/// Labelled single-line input bound to one string field.
#[component]
fn TextField(
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class=registry::classes("field")>
            <label>{label}</label>
            <input
                type=input_type.unwrap_or("text")
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Label and value pair in a summary block.
#[component]
fn SummaryRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="ebike-summary__row">
            <span class="ebike-summary__label">{label}</span>
            <span class="ebike-summary__value">{value}</span>
        </div>
    }
}
