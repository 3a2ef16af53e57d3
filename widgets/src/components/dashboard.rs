//! Vendor sync dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows vendor health, sync totals, alerts and API performance from the
//! toolkit's [`DashboardState`]. Metrics drift on every refresh to stand in
//! for live polling.
//!
//! DESIGN
//! ======
//! Auto-refresh runs on a [`timer::every`] loop cancelled in `on_cleanup`.
//! Refreshes and forced syncs land after a delay through `try_update`, so a
//! completion after unmount is dropped.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use toolkit::dashboard::{
    self, DashboardState, DashboardVendor, FORCE_SYNC_DELAY_MS, REFRESH_DELAY_MS, REFRESH_INTERVAL_MS,
};

use super::NoticeBar;
use crate::registry;
use crate::util::notify::{self, Notice};
use crate::util::timer;

/// Inline style of one response-time bar.
pub fn bar_style(response_ms: u32) -> String {
    format!("height: {:.1}%", dashboard::chart_bar_percent(response_ms).min(100.0))
}

pub fn vendor_class(vendor: &DashboardVendor) -> String {
    format!("ebike-vendor ebike-vendor--{}", vendor.record.status.as_str())
}

#[component]
pub fn VendorDashboard(state: DashboardState) -> impl IntoView {
    let state = RwSignal::new(state);
    let notice = RwSignal::new(None::<Notice>);
    let refreshing = RwSignal::new(false);
    let logs_for = RwSignal::new(None::<String>);
    let chart = StoredValue::new(dashboard::response_chart(&mut registry::fork_rng()));
    let primary = StoredValue::new(registry::classes("buttonPrimary"));
    let secondary = StoredValue::new(registry::classes("buttonSecondary"));

    let refresh = move || {
        if refreshing.get_untracked() {
            return;
        }
        refreshing.set(true);
        timer::after(REFRESH_DELAY_MS, move || {
            let mut rng = registry::fork_rng();
            let now = registry::now();
            state.try_update(|s| s.refresh(&mut rng, now));
            refreshing.try_set(false);
        });
    };

    let interval = StoredValue::new_local(timer::every(REFRESH_INTERVAL_MS, refresh));
    on_cleanup(move || interval.with_value(timer::Interval::cancel));

    let test_connection = move |key: String| {
        if let Some(report) = state.with_untracked(|s| s.connection_report(&key)) {
            notify::info(notice, report);
        }
    };

    let force_sync = move |key: String| {
        let Some(message) = state.with_untracked(|s| s.sync_started_message(&key)) else {
            return;
        };
        notify::info(notice, message);
        timer::after(FORCE_SYNC_DELAY_MS, move || {
            let mut rng = registry::fork_rng();
            let now = registry::now();
            let synced = state.try_update(|s| s.force_sync(&key, &mut rng, now)).flatten();
            if let Some(synced) = synced {
                notify::success(notice, format!("Sync completed: {synced} products updated"));
            }
        });
    };

    let toggle_logs = move |key: String| {
        logs_for.update(|open| *open = if open.as_deref() == Some(key.as_str()) { None } else { Some(key) });
    };

    let overview = move || {
        state.with(|s| {
            let total = s.vendors().len();
            view! {
                <div class="ebike-dashboard__overview">
                    <StatCard label="Connected Vendors" value=format!("{}/{total}", s.healthy_count()) />
                    <StatCard label="Total Products" value=dashboard::format_count(s.total_products()) />
                    <StatCard label="Synced Today" value=dashboard::format_count(s.synced_today()) />
                    <StatCard label="Failed Syncs" value=dashboard::format_count(s.failed_syncs()) />
                    <StatCard label="System Status" value=s.overall_status().label().to_owned() />
                </div>
            }
        })
    };

    let alerts = move || {
        state.with(|s| {
            s.alerts()
                .into_iter()
                .map(|alert| {
                    view! {
                        <div class=format!("ebike-alert ebike-alert--{}", alert.level.as_str())>
                            <span class="ebike-alert__icon">{alert.level.icon()}</span>
                            <span class="ebike-alert__message">{alert.message}</span>
                            <span class="ebike-alert__action">{alert.action}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let vendors = move || {
        let now = registry::now();
        let open_logs = logs_for.get();
        state.with(|s| {
            s.vendors()
                .iter()
                .map(|vendor| {
                    let record = &vendor.record;
                    let (k1, k2, k3) = (record.key.clone(), record.key.clone(), record.key.clone());
                    let logs = (open_logs.as_deref() == Some(record.key.as_str()))
                        .then(|| s.recent_logs(&record.key, now))
                        .flatten();
                    view! {
                        <div class=vendor_class(vendor)>
                            <div class="ebike-vendor__header">
                                <h5>{record.name.clone()}</h5>
                                <span class="ebike-vendor__badge">{dashboard::vendor_badge(record.status)}</span>
                            </div>
                            <p class="ebike-vendor__url">{record.api_url.clone()}</p>
                            <p class="ebike-vendor__sync">
                                {format!(
                                    "Last sync: {} ({} {})",
                                    dashboard::time_ago(vendor.last_sync, now),
                                    dashboard::status_icon(record.sync_status.as_str()),
                                    dashboard::status_label(record.sync_status.as_str()),
                                )}
                            </p>
                            <div class="ebike-vendor__metrics">
                                <span>{format!("Products: {}", dashboard::format_count(record.metrics.total_products))}</span>
                                <span>{format!("Synced today: {}", record.metrics.synced_today)}</span>
                                <span>{format!("Failed: {}", record.metrics.failed_syncs)}</span>
                                <span>{format!("Avg response: {}ms", record.metrics.avg_response_time)}</span>
                                <span>{format!("Rate limit: {}%", record.metrics.rate_limit_used)}</span>
                            </div>
                            <ul class="ebike-vendor__endpoints">
                                {record
                                    .endpoints
                                    .iter()
                                    .map(|endpoint| {
                                        view! {
                                            <li>
                                                <span>{endpoint.name.clone()}</span>
                                                <span>{dashboard::endpoint_badge(endpoint.status, endpoint.response_time)}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                            <div class="ebike-vendor__actions">
                                <button class=secondary.get_value() on:click=move |_| test_connection(k1.clone())>
                                    "Test Connection"
                                </button>
                                <button class=primary.get_value() on:click=move |_| force_sync(k2.clone())>
                                    "Force Sync"
                                </button>
                                <button class=secondary.get_value() on:click=move |_| toggle_logs(k3.clone())>
                                    "View Logs"
                                </button>
                            </div>
                            {logs.map(|lines| {
                                view! {
                                    <pre class="ebike-vendor__logs">
                                        {lines.into_iter().map(|line| view! { <div>{line}</div> }).collect_view()}
                                    </pre>
                                }
                            })}
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let performance = move || {
        state.with(|s| {
            let p = s.performance();
            view! {
                <div class="ebike-dashboard__performance">
                    <StatCard label="API Calls" value=dashboard::format_count(p.total_api_calls) />
                    <StatCard label="Success Rate" value=format!("{}%", s.success_rate()) />
                    <StatCard label="Avg Response" value=format!("{}ms", p.average_response_time) />
                    <StatCard label="Data Transferred" value=p.data_transferred.clone() />
                    <StatCard label="Uptime" value=p.uptime.clone() />
                </div>
            }
        })
    };

    view! {
        <div class="ebike-dashboard">
            <NoticeBar notice=notice />
            <div class="ebike-dashboard__toolbar">
                <span class="ebike-dashboard__updated">
                    {move || format!("Last updated: {}", dashboard::format_time(state.with(DashboardState::last_updated)))}
                </span>
                <button class=move || primary.get_value() disabled=move || refreshing.get() on:click=move |_| refresh()>
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>
            {overview}
            <div class="ebike-dashboard__alerts">{alerts}</div>
            <h4>"Vendors"</h4>
            <div class="ebike-dashboard__vendors">{vendors}</div>
            <h4>"API Performance"</h4>
            {performance}
            <div class="ebike-chart">
                {chart
                    .get_value()
                    .into_iter()
                    .map(|ms| view! { <div class="ebike-chart__bar" style=bar_style(ms) title=format!("{ms}ms")></div> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="ebike-stat">
            <span class="ebike-stat__value">{value}</span>
            <span class="ebike-stat__label">{label}</span>
        </div>
    }
}
