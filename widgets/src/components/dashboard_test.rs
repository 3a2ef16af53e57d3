use time::macros::datetime;
use toolkit::catalog::{DataProvider, DemoData};

use super::*;

#[test]
fn bars_scale_against_half_a_second() {
    assert_eq!(bar_style(250), "height: 50.0%");
    assert_eq!(bar_style(499), "height: 99.8%");
}

#[test]
fn slow_bars_are_capped() {
    assert_eq!(bar_style(900), "height: 100.0%");
}

#[test]
fn vendor_class_carries_status() {
    let state = DashboardState::new(DemoData.vendors(), DemoData.performance(), datetime!(2025-03-05 10:00 UTC));
    let bosch = state.vendor("bosch").unwrap();
    assert_eq!(vendor_class(bosch), "ebike-vendor ebike-vendor--connected");
}
