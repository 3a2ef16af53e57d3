use rand::SeedableRng;
use rand::rngs::StdRng;
use time::macros::datetime;

use super::*;
use crate::catalog::{DataProvider, DemoData};

const NOW: OffsetDateTime = datetime!(2025-03-05 14:30:00 UTC);

fn demo() -> DashboardState {
    DashboardState::new(DemoData.vendors(), DemoData.performance(), NOW)
}

#[test]
fn demo_aggregates() {
    let state = demo();
    assert_eq!(state.vendors().len(), 5);
    assert_eq!(state.healthy_count(), 3);
    assert_eq!(state.total_products(), 6063);
    assert_eq!(state.synced_today(), 244);
    assert_eq!(state.failed_syncs(), 13);
    assert_eq!(state.overall_status(), OverallStatus::Warning);
    assert_eq!(state.success_rate(), "94.6");
}

#[test]
fn last_sync_is_relative_to_start() {
    let state = demo();
    let bosch = state.vendor("bosch").unwrap();
    assert_eq!(bosch.last_sync, datetime!(2025-03-05 14:28:00 UTC));
    assert_eq!(time_ago(bosch.last_sync, NOW), "2 minutes ago");
    assert_eq!(time_ago(state.vendor("trek").unwrap().last_sync, NOW), "1 hour ago");
}

#[test]
fn overall_status_thresholds() {
    assert_eq!(OverallStatus::from_failed(0), OverallStatus::Excellent);
    assert_eq!(OverallStatus::from_failed(4), OverallStatus::Good);
    assert_eq!(OverallStatus::from_failed(5), OverallStatus::Warning);
    assert_eq!(OverallStatus::from_failed(14), OverallStatus::Warning);
    assert_eq!(OverallStatus::from_failed(15), OverallStatus::Critical);
}

#[test]
fn demo_alerts_flag_specialized_twice() {
    let messages: Vec<String> = demo().alerts().into_iter().map(|alert| alert.message).collect();
    assert_eq!(
        messages,
        vec![
            "Specialized Turbo has slow response times (1200ms)".to_owned(),
            "Specialized Turbo approaching rate limit (95%)".to_owned(),
        ]
    );
}

#[test]
fn error_vendor_and_slow_average_raise_alerts() {
    let mut vendors = DemoData.vendors();
    vendors.retain(|vendor| vendor.key == "shimano");
    vendors[0].status = VendorStatus::Error;
    let mut performance = DemoData.performance();
    performance.average_response_time = 501;

    let alerts = DashboardState::new(vendors, performance, NOW).alerts();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].level, AlertLevel::Error);
    assert_eq!(alerts[0].message, "Shimano Steps connection failed");
    assert_eq!(alerts[0].action, "Check API credentials");
    assert_eq!(alerts[1].message, "Overall API response time is slow");
}

#[test]
fn quiet_dashboard_reports_all_clear() {
    let mut vendors = DemoData.vendors();
    vendors.retain(|vendor| vendor.key == "bosch");
    let alerts = DashboardState::new(vendors, DemoData.performance(), NOW).alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].level, AlertLevel::Success);
    assert_eq!(alerts[0].message, "All systems operating normally");
    assert_eq!(alerts[0].level.icon(), "✅");
}

#[test]
fn refresh_drift_stays_in_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut state = demo();
    let later = NOW + Duration::minutes(1);
    for _ in 0..200 {
        let before = state.clone();
        state.refresh(&mut rng, later);
        for (old, new) in before.vendors().iter().zip(state.vendors()) {
            let delta = new.record.metrics.synced_today - old.record.metrics.synced_today;
            if new.record.status == VendorStatus::Connected {
                assert!(delta <= 2);
                assert_eq!(new.last_sync, later);
            } else {
                assert_eq!(delta, 0);
            }
            assert!(new.record.metrics.failed_syncs - old.record.metrics.failed_syncs <= 1);
            assert!((150..=2000).contains(&new.record.metrics.avg_response_time));
            for endpoint in &new.record.endpoints {
                assert!((100..=3000).contains(&endpoint.response_time));
            }
        }
    }
    assert_eq!(state.last_updated(), later);
    assert_eq!(state.vendor("trek").unwrap().last_sync, NOW - Duration::hours(1));
}

#[test]
fn force_sync_adds_between_five_and_fourteen() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut state = demo();
    let synced = state.force_sync("specialized", &mut rng, NOW).unwrap();
    assert!((5..=14).contains(&synced));
    let vendor = state.vendor("specialized").unwrap();
    assert_eq!(vendor.record.metrics.synced_today, 12 + synced);
    assert_eq!(vendor.last_sync, NOW);
    assert_eq!(state.force_sync("giant", &mut rng, NOW), None);
}

#[test]
fn vendor_messages() {
    let state = demo();
    let report = state.connection_report("velo_connect").unwrap();
    assert!(report.contains("Latency: 180ms"));
    assert!(report.ends_with("Endpoint: https://api.veloconnect.ch/v3"));
    assert!(state.sync_started_message("bosch").unwrap().ends_with("Products to sync: 1247"));

    let logs = state.recent_logs("shimano", NOW).unwrap();
    assert_eq!(logs[0], "[14:30:00] INFO: Sync started for Shimano Steps");
    assert_eq!(logs[3], "[14:27:00] INFO: Connection established");
    assert_eq!(state.recent_logs("giant", NOW), None);
}

#[test]
fn badges_and_icons() {
    assert_eq!(vendor_badge(VendorStatus::Maintenance), "🔧 maintenance");
    assert_eq!(status_label(SyncStatus::PartialFailure.as_str()), "partial failure");
    assert_eq!(endpoint_badge(EndpointStatus::Warning, 850), "⚠️ 850ms");
    assert_eq!(status_icon("unknown"), "❓");
}

#[test]
fn formatting_helpers() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(6063), "6,063");
    assert_eq!(format_count(1_234_567), "1,234,567");
    assert_eq!(format_time(datetime!(2025-03-05 09:05:03 UTC)), "09:05:03");
    assert_eq!(time_ago(NOW, NOW), "just now");
    assert_eq!(time_ago(NOW - Duration::hours(3), NOW), "3 hours ago");
}

#[test]
fn response_chart_has_one_bar_per_hour() {
    let chart = response_chart(&mut StdRng::seed_from_u64(1));
    assert_eq!(chart.len(), CHART_HOURS);
    assert!(chart.iter().all(|ms| (200..500).contains(ms)));
    assert!((chart_bar_percent(250) - 50.0).abs() < f64::EPSILON);
}
