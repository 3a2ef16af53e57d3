use std::rc::Rc;

use time::OffsetDateTime;
use time::macros::datetime;
use toolkit::calendar::FixedClock;
use toolkit::mount::Mount;
use toolkit::{AppContext, Toolkit};

use super::*;

const NOW: OffsetDateTime = datetime!(2025-03-05 10:00 UTC);

fn started() -> Toolkit {
    let mut toolkit = Toolkit::new(AppContext::detached(ConfigOverrides::default(), Rc::new(FixedClock(NOW))), 5);
    toolkit.init();
    toolkit
}

fn install_started() {
    assert!(registry::install(started()));
}

#[test]
fn new_instances_are_planned_with_id_write_back() {
    let mut toolkit = started();
    let mounts = vec![
        Mount::new("sizing"),
        Mount::new("wishlist").with_attribute("data-wishlist-id", "main-wishlist"),
        Mount::new("chatbot"),
    ];
    let plans = plan_mounts(toolkit.scan(&mounts), |_, _| false);
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].container, 0);
    assert_eq!(plans[0].write_id.as_ref().map(|(name, _)| *name), Some("data-calculator-id"));
    assert_eq!(plans[0].write_id.as_ref().map(|(_, id)| id.as_str()), Some(plans[0].instance.id.as_str()));
    assert_eq!(plans[1].container, 1);
    assert!(plans[1].write_id.is_none());
}

#[test]
fn rescans_only_remount_missing_views() {
    let mut toolkit = started();
    let mounts = vec![Mount::new("financing").with_attribute("data-calculator-id", "fin-1")];
    plan_mounts(toolkit.scan(&mounts), |_, _| false);

    assert!(plan_mounts(toolkit.scan(&mounts), |kind, id| kind == ToolKind::Financing && id == "fin-1").is_empty());
    let remount = plan_mounts(toolkit.scan(&mounts), |_, _| false);
    assert_eq!(remount.len(), 1);
    assert!(remount[0].write_id.is_none());
}

#[test]
fn shared_id_mounts_into_first_container_only() {
    let mut toolkit = started();
    let mounts = vec![
        Mount::new("comparison").with_attribute("data-comparison-id", "cmp"),
        Mount::new("comparison").with_attribute("data-comparison-id", "cmp"),
    ];
    let plans = plan_mounts(toolkit.scan(&mounts), |_, _| false);
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].container, 0);
}

#[test]
fn tools_sharing_a_calculator_id_both_mount() {
    let mut toolkit = started();
    let mounts = vec![
        Mount::new("sizing").with_attribute("data-calculator-id", "main"),
        Mount::new("rangeCalculator").with_attribute("data-calculator-id", "main"),
    ];
    let plans = plan_mounts(toolkit.scan(&mounts), |_, _| false);
    let kinds: Vec<ToolKind> = plans.iter().map(|plan| plan.instance.kind).collect();
    assert_eq!(kinds, vec![ToolKind::Sizing, ToolKind::RangeCalculator]);

    let rescan = plan_mounts(toolkit.scan(&mounts), |kind, id| kind == ToolKind::Sizing && id == "main");
    assert_eq!(rescan.len(), 1);
    assert_eq!(rescan[0].instance.kind, ToolKind::RangeCalculator);
    assert_eq!(rescan[0].container, 1);
}

#[test]
fn control_surface_needs_a_started_toolkit() {
    assert!(matches!(info_json(), Err(BootError::Unavailable)));
    assert!(matches!(toggle_feature("sizing", false), Err(BootError::Unavailable)));
}

#[test]
fn toggle_feature_unmounts_removed_instances() {
    install_started();
    registry::with_toolkit(|toolkit| toolkit.scan(&[Mount::new("sizing").with_attribute("data-calculator-id", "calc")]));
    registry::keep_mounted(ToolKind::Sizing, "calc", Box::new(()));

    toggle_feature("sizing", false).unwrap();
    assert!(!registry::is_mounted(ToolKind::Sizing, "calc"));
    assert_eq!(registry::with_toolkit(|toolkit| toolkit.is_loaded(ToolKind::Sizing)), Some(false));

    assert!(matches!(toggle_feature("chatbot", true), Err(BootError::Toolkit(ToolkitError::UnknownTool(_)))));
}

#[test]
fn update_config_and_info_round_through_json() {
    install_started();
    update_config(r#"{"theme":"debut"}"#).unwrap();
    let info: serde_json::Value = serde_json::from_str(&info_json().unwrap()).unwrap();
    assert_eq!(info["theme"], "debut");
    assert_eq!(info["version"], "3.0.0");

    assert!(matches!(update_config("{"), Err(BootError::Config(_))));
}
