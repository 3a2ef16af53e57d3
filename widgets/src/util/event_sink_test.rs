use time::macros::datetime;
use toolkit::module::ToolKind;
use toolkit::theme::Theme;
use toolkit::wishlist::WishlistItem;

use super::*;

#[test]
fn ready_event_encodes_version_and_theme() {
    let (name, detail) = encode(&ToolkitEvent::Ready { version: "3.0.0".to_owned(), theme: Theme::Impulse });
    assert_eq!(name, "ebike-toolkit:ready");
    let detail: Value = serde_json::from_str(&detail).unwrap();
    assert_eq!(detail["version"], "3.0.0");
    assert_eq!(detail["theme"], "impulse");
}

#[test]
fn module_ready_uses_tool_name() {
    let (name, detail) = encode(&ToolkitEvent::ModuleReady(ToolKind::RangeCalculator));
    assert_eq!(name, "ebike-toolkit:rangeCalculator:ready");
    assert_eq!(detail, r#"{"module":"rangeCalculator"}"#);
}

#[test]
fn wishlist_change_carries_count() {
    let item = WishlistItem {
        id: "city-comfort".to_owned(),
        name: "City Comfort Pro".to_owned(),
        price: 2499.0,
        added_at: datetime!(2025-03-05 10:00 UTC),
    };
    let (name, detail) = encode(&ToolkitEvent::WishlistChanged { items: vec![item] });
    assert_eq!(name, WISHLIST_CHANGED);
    let detail: Value = serde_json::from_str(&detail).unwrap();
    assert_eq!(wishlist_count(&detail), Some(1));
    assert_eq!(detail["items"][0]["id"], "city-comfort");
    assert_eq!(wishlist_count(&Value::Null), None);
}
