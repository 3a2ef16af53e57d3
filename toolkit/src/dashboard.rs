//! Vendor sync dashboard model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard shows the product feeds the shop pulls from bike vendors.
//! Nothing here talks to a vendor: records come from the
//! [`DataProvider`](crate::catalog::DataProvider) and every refresh applies a
//! small random drift so the page looks alive.
//!
//! DESIGN
//! ======
//! [`DashboardState`] owns the vendor list and aggregate performance numbers.
//! All derived figures (counts, overall status, alerts) are recomputed from
//! that state on demand. Randomness and the current time are passed in so
//! tests can pin both.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use rand::Rng;
use time::{Duration, OffsetDateTime};

use crate::catalog::{EndpointStatus, PerformanceData, SyncStatus, VendorRecord, VendorStatus};

/// Auto-refresh period.
pub const REFRESH_INTERVAL_MS: u32 = 30_000;
/// Simulated latency of a manual refresh.
pub const REFRESH_DELAY_MS: u32 = 1000;
/// Simulated latency before a forced sync lands.
pub const FORCE_SYNC_DELAY_MS: u32 = 2000;

pub const CHART_HOURS: usize = 24;

const FAILURE_CHANCE: f64 = 0.1;
const RATE_LIMIT_ALERT: u32 = 90;
const SLOW_AVERAGE_MS: u32 = 500;
const VENDOR_RESPONSE_MS: (u32, u32) = (150, 2000);
const ENDPOINT_RESPONSE_MS: (u32, u32) = (100, 3000);

// =============================================================================
// STATUS
// =============================================================================

/// Icon shown next to a status word.
#[must_use]
pub fn status_icon(status: &str) -> &'static str {
    match status {
        "connected" | "healthy" | "success" => "✅",
        "warning" | "partial_failure" => "⚠️",
        "error" => "❌",
        "maintenance" => "🔧",
        _ => "❓",
    }
}

/// `partial_failure` → `partial failure`.
#[must_use]
pub fn status_label(status: &str) -> String {
    status.replace('_', " ")
}

#[must_use]
pub fn vendor_badge(status: VendorStatus) -> String {
    format!("{} {}", status_icon(status.as_str()), status_label(status.as_str()))
}

#[must_use]
pub fn endpoint_badge(status: EndpointStatus, response_ms: u32) -> String {
    format!("{} {response_ms}ms", status_icon(status.as_str()))
}

/// Health of the sync pipeline from the number of failed syncs today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverallStatus {
    Excellent,
    Good,
    Warning,
    Critical,
}

impl OverallStatus {
    #[must_use]
    pub fn from_failed(failed: u32) -> Self {
        match failed {
            0 => Self::Excellent,
            1..5 => Self::Good,
            5..15 => Self::Warning,
            _ => Self::Critical,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Warning,
    Error,
}

impl AlertLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => status_icon("healthy"),
            Self::Warning | Self::Error => status_icon(self.as_str()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub action: &'static str,
}

impl Alert {
    fn new(level: AlertLevel, message: String, action: &'static str) -> Self {
        Self { level, message, action }
    }
}

// =============================================================================
// FORMATTING
// =============================================================================

/// `6063` → `6,063`.
#[must_use]
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `HH:MM:SS`, 24-hour.
#[must_use]
pub fn format_time(at: OffsetDateTime) -> String {
    format!("{:02}:{:02}:{:02}", at.hour(), at.minute(), at.second())
}

/// `just now`, `5 minutes ago`, `1 hour ago`.
#[must_use]
pub fn time_ago(then: OffsetDateTime, now: OffsetDateTime) -> String {
    let minutes = (now - then).whole_minutes().max(0);
    match minutes {
        0 => "just now".to_owned(),
        1 => "1 minute ago".to_owned(),
        2..60 => format!("{minutes} minutes ago"),
        60..120 => "1 hour ago".to_owned(),
        _ => format!("{} hours ago", minutes / 60),
    }
}

/// Hourly average response times for the last day, each in `200..500` ms.
pub fn response_chart<R: Rng + ?Sized>(rng: &mut R) -> Vec<u32> {
    (0..CHART_HOURS).map(|_| rng.random_range(200..500)).collect()
}

/// Bar height in percent of a 500 ms scale.
#[must_use]
pub fn chart_bar_percent(response_ms: u32) -> f64 {
    f64::from(response_ms) / f64::from(SLOW_AVERAGE_MS) * 100.0
}

fn nudge(value: u32, delta: i64, (min, max): (u32, u32)) -> u32 {
    let moved = (i64::from(value) + delta).clamp(i64::from(min), i64::from(max));
    u32::try_from(moved).unwrap_or(min)
}

// =============================================================================
// STATE
// =============================================================================

/// One vendor plus the wall-clock time of its last sync.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVendor {
    pub record: VendorRecord,
    pub last_sync: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    vendors: Vec<DashboardVendor>,
    performance: PerformanceData,
    last_updated: OffsetDateTime,
}

impl DashboardState {
    #[must_use]
    pub fn new(records: Vec<VendorRecord>, performance: PerformanceData, now: OffsetDateTime) -> Self {
        let vendors = records
            .into_iter()
            .map(|record| {
                let last_sync = now - Duration::seconds(i64::from(record.last_sync_secs_ago));
                DashboardVendor { record, last_sync }
            })
            .collect();
        Self { vendors, performance, last_updated: now }
    }

    #[must_use]
    pub fn vendors(&self) -> &[DashboardVendor] {
        &self.vendors
    }

    #[must_use]
    pub fn vendor(&self, key: &str) -> Option<&DashboardVendor> {
        self.vendors.iter().find(|vendor| vendor.record.key == key)
    }

    #[must_use]
    pub fn performance(&self) -> &PerformanceData {
        &self.performance
    }

    #[must_use]
    pub fn last_updated(&self) -> OffsetDateTime {
        self.last_updated
    }

    /// Vendors whose status is `connected`.
    #[must_use]
    pub fn healthy_count(&self) -> usize {
        self.vendors.iter().filter(|vendor| vendor.record.status == VendorStatus::Connected).count()
    }

    fn sum(&self, metric: impl Fn(&VendorRecord) -> u32) -> u32 {
        self.vendors.iter().map(|vendor| metric(&vendor.record)).fold(0, u32::saturating_add)
    }

    #[must_use]
    pub fn total_products(&self) -> u32 {
        self.sum(|record| record.metrics.total_products)
    }

    #[must_use]
    pub fn synced_today(&self) -> u32 {
        self.sum(|record| record.metrics.synced_today)
    }

    #[must_use]
    pub fn failed_syncs(&self) -> u32 {
        self.sum(|record| record.metrics.failed_syncs)
    }

    #[must_use]
    pub fn overall_status(&self) -> OverallStatus {
        OverallStatus::from_failed(self.failed_syncs())
    }

    /// Successful share of all API calls, one decimal, without the percent sign.
    #[must_use]
    pub fn success_rate(&self) -> String {
        let total = self.performance.total_api_calls;
        if total == 0 {
            return "0.0".to_owned();
        }
        let rate = f64::from(self.performance.successful_calls) / f64::from(total) * 100.0;
        format!("{rate:.1}")
    }

    /// Active alerts in vendor order, then global ones. Never empty.
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        let mut alerts = Vec::new();
        for DashboardVendor { record, .. } in &self.vendors {
            match record.status {
                VendorStatus::Warning => alerts.push(Alert::new(
                    AlertLevel::Warning,
                    format!("{} has slow response times ({}ms)", record.name, record.metrics.avg_response_time),
                    "Monitor performance",
                )),
                VendorStatus::Error => alerts.push(Alert::new(
                    AlertLevel::Error,
                    format!("{} connection failed", record.name),
                    "Check API credentials",
                )),
                VendorStatus::Connected | VendorStatus::Maintenance => {}
            }
            if record.metrics.rate_limit_used > RATE_LIMIT_ALERT {
                alerts.push(Alert::new(
                    AlertLevel::Warning,
                    format!("{} approaching rate limit ({}%)", record.name, record.metrics.rate_limit_used),
                    "Reduce sync frequency",
                ));
            }
        }
        if self.performance.average_response_time > SLOW_AVERAGE_MS {
            alerts.push(Alert::new(
                AlertLevel::Warning,
                "Overall API response time is slow".to_owned(),
                "Optimize API calls",
            ));
        }
        if alerts.is_empty() {
            alerts.push(Alert::new(
                AlertLevel::Success,
                "All systems operating normally".to_owned(),
                "No action required",
            ));
        }
        alerts
    }

    /// Apply one refresh tick.
    pub fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R, now: OffsetDateTime) {
        self.last_updated = now;
        for vendor in &mut self.vendors {
            let metrics = &mut vendor.record.metrics;
            if vendor.record.status == VendorStatus::Connected {
                metrics.synced_today = metrics.synced_today.saturating_add(rng.random_range(0..=2));
                vendor.last_sync = now;
            }
            if rng.random::<f64>() < FAILURE_CHANCE {
                metrics.failed_syncs = metrics.failed_syncs.saturating_add(1);
            }
            metrics.avg_response_time = nudge(metrics.avg_response_time, rng.random_range(-20..20), VENDOR_RESPONSE_MS);
            for endpoint in &mut vendor.record.endpoints {
                endpoint.response_time = nudge(endpoint.response_time, rng.random_range(-20..20), ENDPOINT_RESPONSE_MS);
            }
        }
        tracing::debug!(failed = self.failed_syncs(), "dashboard refreshed");
    }

    /// Land a forced sync for `key`. Returns the number of products synced,
    /// or `None` for an unknown vendor.
    pub fn force_sync<R: Rng + ?Sized>(&mut self, key: &str, rng: &mut R, now: OffsetDateTime) -> Option<u32> {
        let vendor = self.vendors.iter_mut().find(|vendor| vendor.record.key == key)?;
        let synced = rng.random_range(5..=14);
        vendor.record.metrics.synced_today = vendor.record.metrics.synced_today.saturating_add(synced);
        vendor.record.sync_status = SyncStatus::Success;
        vendor.last_sync = now;
        self.last_updated = now;
        tracing::info!(vendor = %key, synced, "forced sync completed");
        Some(synced)
    }

    // -------------------------------------------------------------------------
    // Vendor action messages
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn connection_report(&self, key: &str) -> Option<String> {
        let record = &self.vendor(key)?.record;
        Some(format!(
            "Testing connection to {}...\n\nResult: Connection successful ✅\nLatency: {}ms\nEndpoint: {}",
            record.name, record.metrics.avg_response_time, record.api_url
        ))
    }

    #[must_use]
    pub fn sync_started_message(&self, key: &str) -> Option<String> {
        let record = &self.vendor(key)?.record;
        Some(format!(
            "Force sync initiated for {}...\n\nSync started successfully ✅\nEstimated completion: 2-3 minutes\nProducts to sync: {}",
            record.name, record.metrics.total_products
        ))
    }

    /// Sample log lines, newest first, one minute apart.
    #[must_use]
    pub fn recent_logs(&self, key: &str, now: OffsetDateTime) -> Option<Vec<String>> {
        let name = &self.vendor(key)?.record.name;
        let at = |minutes_ago: i64| format_time(now - Duration::minutes(minutes_ago));
        Some(vec![
            format!("[{}] INFO: Sync started for {name}", at(0)),
            format!("[{}] SUCCESS: 25 products updated", at(1)),
            format!("[{}] WARNING: Rate limit at 85%", at(2)),
            format!("[{}] INFO: Connection established", at(3)),
        ])
    }
}
