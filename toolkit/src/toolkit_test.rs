use time::macros::datetime;

use super::*;
use crate::calendar::FixedClock;
use crate::catalog::{
    BikeRecord, ContentTemplate, FeedSource, PerformanceData, RangeSpec, ServiceLocation, ServicePackage,
    TestRideLocation, VendorRecord,
};
use crate::events::RecordingSink;

const NOW: OffsetDateTime = datetime!(2025-03-05 10:00 UTC);

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, ToolkitError> {
        Err(ToolkitError::Storage("storage disabled".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), ToolkitError> {
        Err(ToolkitError::Storage("storage disabled".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), ToolkitError> {
        Ok(())
    }
}

/// Demo data without any bikes.
struct NoBikes;

impl DataProvider for NoBikes {
    fn bikes(&self) -> Vec<BikeRecord> {
        Vec::new()
    }
    fn range_specs(&self) -> Vec<RangeSpec> {
        DemoData.range_specs()
    }
    fn test_ride_locations(&self) -> Vec<TestRideLocation> {
        DemoData.test_ride_locations()
    }
    fn service_packages(&self) -> Vec<ServicePackage> {
        DemoData.service_packages()
    }
    fn service_locations(&self) -> Vec<ServiceLocation> {
        DemoData.service_locations()
    }
    fn vendors(&self) -> Vec<VendorRecord> {
        DemoData.vendors()
    }
    fn performance(&self) -> PerformanceData {
        DemoData.performance()
    }
    fn feed_sources(&self) -> Vec<FeedSource> {
        DemoData.feed_sources()
    }
    fn content_templates(&self) -> Vec<ContentTemplate> {
        DemoData.content_templates()
    }
}

fn context(overrides: ConfigOverrides, store: Rc<dyn KeyValueStore>, data: Rc<dyn DataProvider>) -> (AppContext, Rc<RecordingSink>) {
    let sink = Rc::new(RecordingSink::new());
    let ctx = AppContext::new(
        overrides,
        &PageMarkers::new().with_selector(".shopify-section"),
        store,
        sink.clone(),
        data,
        Rc::new(FixedClock(NOW)),
    );
    (ctx, sink)
}

fn toolkit() -> (Toolkit, Rc<RecordingSink>) {
    let (ctx, sink) = context(ConfigOverrides::default(), Rc::new(MemoryStore::new()), Rc::new(DemoData));
    (Toolkit::new(ctx, 42), sink)
}

#[test]
fn init_loads_every_module_once_and_announces_ready() {
    let (mut toolkit, sink) = toolkit();
    let report = toolkit.init();
    assert_eq!(report.loaded.len(), ToolKind::ALL.len());
    assert!(report.failed.is_empty());
    assert_eq!(report.loaded[0], ToolKind::Comparison);

    let names = sink.names();
    assert_eq!(names.iter().filter(|name| *name == "ebike-toolkit:comparison:ready").count(), 1);
    assert_eq!(names.last().map(String::as_str), Some("ebike-toolkit:ready"));
    assert_eq!(
        sink.events().last(),
        Some(&ToolkitEvent::Ready { version: crate::VERSION.to_owned(), theme: Theme::GenericShopify })
    );

    assert!(toolkit.init().loaded.is_empty());
    assert_eq!(sink.names().len(), names.len());
}

#[test]
fn disabled_feature_is_not_loaded() {
    let overrides = ConfigOverrides::from_json(r#"{"features":{"blogGenerator":false}}"#).unwrap();
    let (ctx, _) = context(overrides, Rc::new(MemoryStore::new()), Rc::new(DemoData));
    let mut toolkit = Toolkit::new(ctx, 1);
    toolkit.init();
    assert!(!toolkit.is_loaded(ToolKind::BlogGenerator));
    assert!(toolkit.is_loaded(ToolKind::DashboardManagement));
}

#[test]
fn failing_modules_do_not_block_the_rest() {
    let (ctx, sink) = context(ConfigOverrides::default(), Rc::new(BrokenStore), Rc::new(NoBikes));
    let mut toolkit = Toolkit::new(ctx, 1);
    let report = toolkit.init();

    let failed: Vec<ToolKind> = report
        .failed
        .iter()
        .filter_map(|e| match e {
            ToolkitError::ModuleInit { module, .. } => Some(*module),
            _ => None,
        })
        .collect();
    assert_eq!(failed, vec![ToolKind::Comparison, ToolKind::Wishlist]);
    assert_eq!(report.loaded.len(), ToolKind::ALL.len() - 2);
    assert!(toolkit.wishlist().is_none());
    assert!(toolkit.is_loaded(ToolKind::Sizing));
    assert_eq!(sink.names().last().map(String::as_str), Some("ebike-toolkit:ready"));
}

#[test]
fn scanning_twice_reuses_instances() {
    let (mut toolkit, _) = toolkit();
    toolkit.init();
    let mounts = vec![Mount::new("sizing"), Mount::new("comparison").with_attribute("data-max-bikes", "3")];

    let first = toolkit.scan(&mounts);
    assert_eq!(first.len(), 2);
    assert!(first.iter().all(|binding| binding.created && binding.assigned_id));
    assert!(first[0].instance.id.starts_with("calculator_"));
    assert!(matches!(&first[1].instance.state, ToolState::Comparison(selection) if selection.max_bikes() == 3));

    // The host writes the assigned ids back onto the containers.
    let tagged: Vec<Mount> = mounts
        .iter()
        .zip(&first)
        .map(|(mount, binding)| {
            mount.clone().with_attribute(binding.instance.kind.id_attribute(), &binding.instance.id)
        })
        .collect();
    let second = toolkit.scan(&tagged);
    assert_eq!(second.len(), 2);
    assert!(second.iter().all(|binding| !binding.created));
    assert_eq!(second[0].instance.id, first[0].instance.id);
    assert_eq!(toolkit.module(ToolKind::Sizing).map(ToolModule::len), Some(1));
}

#[test]
fn scan_keeps_host_supplied_ids_and_skips_unknown_tools() {
    let (mut toolkit, _) = toolkit();
    toolkit.init();
    let mounts = vec![
        Mount::new("chatbot"),
        Mount::new("wishlist").with_attribute("data-wishlist-id", "main-wishlist"),
        Mount::new("rangeCalculator").with_attribute("data-units", "imperial"),
    ];
    let bindings = toolkit.scan(&mounts);
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0].mount, 1);
    assert_eq!(bindings[0].instance.id, "main-wishlist");
    assert!(bindings[0].created);
    assert!(!bindings[0].assigned_id);
    assert!(matches!(&bindings[1].instance.state, ToolState::Range(form) if form.rider_weight == "165"));
    assert!(toolkit.instance(ToolKind::Wishlist, "main-wishlist").is_some());
    assert!(toolkit.instance(ToolKind::Sizing, "main-wishlist").is_none());
}

#[test]
fn scan_before_init_binds_nothing() {
    let (mut toolkit, _) = toolkit();
    assert!(toolkit.scan(&[Mount::new("sizing")]).is_empty());
}

#[test]
fn unbind_forgets_instance() {
    let (mut toolkit, _) = toolkit();
    toolkit.init();
    let id = toolkit.scan(&[Mount::new("financing")])[0].instance.id.clone();
    assert!(toolkit.unbind(ToolKind::Sizing, &id).is_none());
    assert_eq!(toolkit.unbind(ToolKind::Financing, &id).map(|instance| instance.kind), Some(ToolKind::Financing));
    assert!(toolkit.unbind(ToolKind::Financing, &id).is_none());
}

#[test]
fn toggle_feature_destroys_and_reloads() {
    let (mut toolkit, sink) = toolkit();
    toolkit.init();
    let id = toolkit.scan(&[Mount::new("wishlist")])[0].instance.id.clone();

    let removed = toolkit.toggle_feature(ToolKind::Wishlist, false).unwrap();
    assert_eq!(removed, vec![id]);
    assert!(!toolkit.is_loaded(ToolKind::Wishlist));
    assert!(toolkit.wishlist().is_none());
    assert!(!toolkit.config().features.wishlist);
    assert!(matches!(
        toolkit.add_to_wishlist("city-comfort", "City", 2499.0),
        Err(ToolkitError::ModuleNotLoaded(ToolKind::Wishlist))
    ));

    assert!(toolkit.toggle_feature(ToolKind::Wishlist, true).unwrap().is_empty());
    assert!(toolkit.is_loaded(ToolKind::Wishlist));
    assert_eq!(sink.names().last().map(String::as_str), Some("ebike-toolkit:wishlist:ready"));
    assert!(toolkit.add_to_wishlist("city-comfort", "City", 2499.0).unwrap());
    assert_eq!(toolkit.wishlist().map(|w| w.items()[0].added_at), Some(NOW));
    assert!(toolkit.remove_from_wishlist("city-comfort").unwrap());
}

#[test]
fn update_config_reapplies_theme_adaptation() {
    let (mut toolkit, _) = toolkit();
    let overrides = ConfigOverrides::from_json(r#"{"theme":"impulse"}"#).unwrap();
    toolkit.update_config(&overrides);
    assert_eq!(toolkit.theme(), Theme::Impulse);
    assert_eq!(
        toolkit.map_classes("buttonPrimary grid custom-token"),
        "btn product-form__cart-submit grid grid--uniform custom-token"
    );

    let branding = ConfigOverrides::from_json(r##"{"branding":{"accent":"#123456"}}"##).unwrap();
    toolkit.update_config(&branding);
    assert_eq!(toolkit.theme(), Theme::Impulse);
    assert!(toolkit.css_variables().contains(&("--ebike-accent".to_owned(), "#123456".to_owned())));
    assert!(toolkit.css_variables().contains(&("--ebike-theme".to_owned(), "impulse".to_owned())));
}

#[test]
fn info_reports_version_theme_and_modules() {
    let (mut toolkit, _) = toolkit();
    toolkit.init();
    let info = toolkit.info();
    assert_eq!(info.version, "3.0.0");
    assert_eq!(info.theme, Theme::GenericShopify);
    assert_eq!(info.modules.len(), ToolKind::ALL.len());

    let json = info.to_json().unwrap();
    assert_eq!(json["theme"], "generic-shopify");
    assert_eq!(json["modules"][0], "sizing");
    assert_eq!(json["config"]["features"]["rangeCalculator"], true);
    assert_eq!(
        toolkit.stylesheet_href("https://shop.example/"),
        "https://shop.example/assets/godspeed-bike-toolkit.css?v=3.0.0"
    );
}

#[test]
fn detached_context_uses_demo_data() {
    let ctx = AppContext::detached(ConfigOverrides::default(), Rc::new(FixedClock(NOW)));
    assert_eq!(ctx.theme, Theme::Unknown);
    let state = initial_state(ToolKind::DashboardManagement, &InstanceSettings::default(), &ctx);
    assert!(matches!(state, ToolState::Dashboard(dashboard) if dashboard.healthy_count() == 3));
}

#[test]
fn tools_sharing_an_id_attribute_stay_separate() {
    let (mut toolkit, _) = toolkit();
    toolkit.init();
    let mounts = vec![
        Mount::new("sizing").with_attribute("data-calculator-id", "main"),
        Mount::new("rangeCalculator").with_attribute("data-calculator-id", "main"),
    ];
    let bindings = toolkit.scan(&mounts);
    let kinds: Vec<ToolKind> = bindings.iter().map(|binding| binding.instance.kind).collect();
    assert_eq!(kinds, vec![ToolKind::Sizing, ToolKind::RangeCalculator]);

    assert_eq!(toolkit.unbind(ToolKind::Sizing, "main").map(|instance| instance.kind), Some(ToolKind::Sizing));
    assert!(toolkit.instance(ToolKind::Sizing, "main").is_none());
    assert!(toolkit.instance(ToolKind::RangeCalculator, "main").is_some());

    let rescan = toolkit.scan(&mounts);
    assert!(rescan[0].created);
    assert!(!rescan[1].created);
}

#[test]
fn failed_enable_leaves_feature_off() {
    let (ctx, _) = context(ConfigOverrides::default(), Rc::new(MemoryStore::new()), Rc::new(NoBikes));
    let mut toolkit = Toolkit::new(ctx, 3);
    toolkit.init();
    toolkit.toggle_feature(ToolKind::Comparison, false).unwrap();

    assert!(matches!(
        toolkit.toggle_feature(ToolKind::Comparison, true),
        Err(ToolkitError::ModuleInit { module: ToolKind::Comparison, .. })
    ));
    assert!(!toolkit.is_loaded(ToolKind::Comparison));
    assert!(!toolkit.config().features.comparison);
    assert!(!toolkit.info().config.features.comparison);
}
