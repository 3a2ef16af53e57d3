use std::rc::Rc;

use toolkit::events::NullSink;
use toolkit::wishlist::Wishlist;

use super::*;

#[test]
fn host_builds_report_storage_unavailable() {
    assert!(matches!(LocalStore.get("ebike-wishlist"), Err(ToolkitError::Storage(_))));
    assert!(matches!(LocalStore.set("ebike-wishlist", "[]"), Err(ToolkitError::Storage(_))));
}

#[test]
fn wishlist_load_surfaces_the_failure() {
    let loaded = Wishlist::load(Rc::new(LocalStore), Rc::new(NullSink));
    assert!(matches!(loaded, Err(ToolkitError::Storage(message)) if message.contains("localStorage")));
}
