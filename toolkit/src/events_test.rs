use super::*;

#[test]
fn event_names_follow_dom_contract() {
    let ready = ToolkitEvent::Ready { version: "3.0.0".to_owned(), theme: Theme::Godspeed };
    assert_eq!(ready.name(), "ebike-toolkit:ready");
    assert_eq!(ToolkitEvent::ModuleReady(ToolKind::RangeCalculator).name(), "ebike-toolkit:rangeCalculator:ready");
    assert_eq!(ToolkitEvent::WishlistChanged { items: Vec::new() }.name(), "ebike-wishlist:changed");
}

#[test]
fn ready_detail_carries_version_and_theme() {
    let ready = ToolkitEvent::Ready { version: "3.0.0".to_owned(), theme: Theme::GenericShopify };
    assert_eq!(ready.detail(), json!({ "version": "3.0.0", "theme": "generic-shopify" }));
}

#[test]
fn wishlist_detail_counts_items() {
    let event = ToolkitEvent::WishlistChanged { items: Vec::new() };
    assert_eq!(event.detail()["count"], json!(0));
    assert_eq!(event.detail()["items"], json!([]));
}

#[test]
fn recording_sink_keeps_order() {
    let sink = RecordingSink::new();
    sink.emit(&ToolkitEvent::ModuleReady(ToolKind::Sizing));
    sink.emit(&ToolkitEvent::ModuleReady(ToolKind::Wishlist));
    assert_eq!(sink.names(), vec!["ebike-toolkit:sizing:ready", "ebike-toolkit:wishlist:ready"]);
    NullSink.emit(&ToolkitEvent::ModuleReady(ToolKind::Sizing));
}
