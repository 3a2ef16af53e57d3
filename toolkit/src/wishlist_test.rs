use std::rc::Rc;

use time::macros::datetime;

use super::*;
use crate::events::RecordingSink;
use crate::storage::MemoryStore;

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, ToolkitError> {
        Err(ToolkitError::Storage("quota exceeded".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), ToolkitError> {
        Err(ToolkitError::Storage("quota exceeded".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), ToolkitError> {
        Ok(())
    }
}

fn fixture() -> (Rc<MemoryStore>, Rc<RecordingSink>, Wishlist) {
    let store = Rc::new(MemoryStore::new());
    let sink = Rc::new(RecordingSink::new());
    let wishlist = Wishlist::load(store.clone(), sink.clone()).unwrap();
    (store, sink, wishlist)
}

#[test]
fn add_is_idempotent_per_id() {
    let (_, sink, mut wishlist) = fixture();
    let now = datetime!(2025-03-05 10:00 UTC);
    assert!(wishlist.add("trekking-sport", "Trekking Sport X1", 3299.0, now).unwrap());
    assert!(!wishlist.add("trekking-sport", "Trekking Sport X1", 3299.0, now).unwrap());
    assert_eq!(wishlist.len(), 1);
    assert_eq!(sink.names(), vec!["ebike-wishlist:changed"]);
}

#[test]
fn remove_then_add_restores_single_entry_with_new_timestamp() {
    let (_, _, mut wishlist) = fixture();
    wishlist.add("cargo-family", "Cargo Family+", 4599.0, datetime!(2025-03-05 10:00 UTC)).unwrap();
    assert!(wishlist.remove("cargo-family").unwrap());
    wishlist.add("cargo-family", "Cargo Family+", 4599.0, datetime!(2025-03-06 12:30 UTC)).unwrap();

    assert_eq!(wishlist.len(), 1);
    assert_eq!(wishlist.items()[0].added_at, datetime!(2025-03-06 12:30 UTC));
}

#[test]
fn changes_persist_and_reload() {
    let (store, sink, mut wishlist) = fixture();
    wishlist.add("city-comfort", "City Comfort Pro", 2499.0, datetime!(2025-01-01 8:00 UTC)).unwrap();

    let raw = store.get(STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains("\"addedAt\":\"2025-01-01T08:00:00Z\""));

    let reloaded = Wishlist::load(store, sink).unwrap();
    assert_eq!(reloaded.items(), wishlist.items());
}

#[test]
fn remove_of_absent_id_still_announces() {
    let (_, sink, mut wishlist) = fixture();
    assert!(!wishlist.remove("missing").unwrap());
    assert_eq!(sink.events().len(), 1);
}

#[test]
fn malformed_storage_loads_empty() {
    let store = Rc::new(MemoryStore::new());
    store.set(STORAGE_KEY, "{not json").unwrap();
    let wishlist = Wishlist::load(store, Rc::new(RecordingSink::new())).unwrap();
    assert!(wishlist.is_empty());
}

#[test]
fn reads_timestamps_written_by_browsers() {
    let store = Rc::new(MemoryStore::new());
    store
        .set(STORAGE_KEY, r#"[{"id":"a","name":"A","price":10,"addedAt":"2025-03-05T10:00:00.123Z","extra":true}]"#)
        .unwrap();
    let wishlist = Wishlist::load(store, Rc::new(RecordingSink::new())).unwrap();
    assert_eq!(wishlist.items()[0].added_at.date(), time::macros::date!(2025 - 03 - 05));
}

#[test]
fn failing_store_surfaces_storage_error() {
    let err = Wishlist::load(Rc::new(BrokenStore), Rc::new(RecordingSink::new())).err().unwrap();
    assert!(matches!(err, ToolkitError::Storage(_)));
}

#[test]
fn view_lists_items_or_empty_state() {
    let (_, _, mut wishlist) = fixture();
    let view = wishlist.view();
    assert!(view.is_empty());
    assert_eq!(view.count_label, "0 items");

    wishlist.add("mountain-trail", "Mountain Trail Pro", 3899.0, datetime!(2025-01-01 8:00 UTC)).unwrap();
    let view = wishlist.view();
    assert_eq!(view.count_label, "1 items");
    assert_eq!(view.rows[0].price, "CHF 3899.00");
}

/// Reads succeed; every write is rejected.
struct ReadOnlyStore(MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, ToolkitError> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), ToolkitError> {
        Err(ToolkitError::Storage("quota".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), ToolkitError> {
        Err(ToolkitError::Storage("quota".to_owned()))
    }
}

#[test]
fn failed_add_leaves_list_unchanged() {
    let sink = Rc::new(RecordingSink::new());
    let mut wishlist = Wishlist::load(Rc::new(ReadOnlyStore(MemoryStore::new())), sink.clone()).unwrap();
    let now = datetime!(2025-03-05 10:00 UTC);

    assert!(matches!(wishlist.add("a", "A", 100.0, now), Err(ToolkitError::Storage(_))));
    assert_eq!(wishlist.len(), 0);
    assert!(matches!(wishlist.add("a", "A", 100.0, now), Err(ToolkitError::Storage(_))));
    assert!(sink.names().is_empty());
}

#[test]
fn failed_remove_keeps_the_item() {
    let inner = MemoryStore::new();
    inner
        .set(STORAGE_KEY, r#"[{"id":"a","name":"A","price":100.0,"addedAt":"2025-03-05T10:00:00Z"}]"#)
        .unwrap();
    let mut wishlist = Wishlist::load(Rc::new(ReadOnlyStore(inner)), Rc::new(RecordingSink::new())).unwrap();
    assert_eq!(wishlist.len(), 1);

    assert!(wishlist.remove("a").is_err());
    assert!(wishlist.contains("a"));
}
