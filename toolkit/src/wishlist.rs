//! Persisted wishlist.
//!
//! The list lives under a single storage key as a JSON array, read once when
//! the module initializes and rewritten wholesale on every change. Every
//! instance on the page renders the same list.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::ToolkitError;
use crate::events::{EventSink, ToolkitEvent};
use crate::input;
use crate::storage::{KeyValueStore, save_json};

/// Storage key holding the serialized list.
pub const STORAGE_KEY: &str = "ebike-wishlist";

pub const EMPTY_MESSAGE: &str = "Your wishlist is empty";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub added_at: OffsetDateTime,
}

/// Row of the rendered list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WishlistRow {
    pub id: String,
    pub name: String,
    pub price: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WishlistView {
    pub count_label: String,
    pub rows: Vec<WishlistRow>,
}

impl WishlistView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct Wishlist {
    store: Rc<dyn KeyValueStore>,
    events: Rc<dyn EventSink>,
    items: Vec<WishlistItem>,
}

impl Wishlist {
    /// Read the stored list. Malformed JSON loads as empty; a failing store is an error.
    pub fn load(store: Rc<dyn KeyValueStore>, events: Rc<dyn EventSink>) -> Result<Self, ToolkitError> {
        let items = match store.get(STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<WishlistItem>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(error = %e, "stored wishlist is malformed; starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        tracing::debug!(count = items.len(), "wishlist loaded");
        Ok(Self { store, events, items })
    }

    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Append an item unless `id` is already listed. Returns whether it was added.
    /// A failed write leaves the list unchanged.
    pub fn add(&mut self, id: &str, name: &str, price: f64, now: OffsetDateTime) -> Result<bool, ToolkitError> {
        if self.contains(id) {
            return Ok(false);
        }
        let mut items = self.items.clone();
        items.push(WishlistItem { id: id.to_owned(), name: name.to_owned(), price, added_at: now });
        self.commit(items)?;
        Ok(true)
    }

    /// Drop every item with `id`. The list is persisted and announced even when nothing matched.
    pub fn remove(&mut self, id: &str) -> Result<bool, ToolkitError> {
        let items: Vec<WishlistItem> = self.items.iter().filter(|item| item.id != id).cloned().collect();
        let removed = items.len() != self.items.len();
        self.commit(items)?;
        Ok(removed)
    }

    fn commit(&mut self, items: Vec<WishlistItem>) -> Result<(), ToolkitError> {
        save_json(self.store.as_ref(), STORAGE_KEY, &items)?;
        self.items = items;
        self.events.emit(&ToolkitEvent::WishlistChanged { items: self.items.clone() });
        Ok(())
    }

    #[must_use]
    pub fn view(&self) -> WishlistView {
        WishlistView {
            count_label: format!("{} items", self.items.len()),
            rows: self
                .items
                .iter()
                .map(|item| WishlistRow { id: item.id.clone(), name: item.name.clone(), price: input::format_chf(item.price) })
                .collect(),
        }
    }
}
