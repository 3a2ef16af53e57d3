//! Outbound toolkit events.
//!
//! Events are fire-and-forget notifications for page code outside the
//! toolkit. No module listens to another module's events.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::RefCell;

use serde_json::{Value, json};

use crate::module::ToolKind;
use crate::theme::Theme;
use crate::wishlist::WishlistItem;

#[derive(Clone, Debug, PartialEq)]
pub enum ToolkitEvent {
    /// Initialization finished; every enabled module has loaded or failed.
    Ready { version: String, theme: Theme },
    /// One module initialized successfully.
    ModuleReady(ToolKind),
    /// The wishlist was rewritten.
    WishlistChanged { items: Vec<WishlistItem> },
}

impl ToolkitEvent {
    /// DOM event type.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Ready { .. } => "ebike-toolkit:ready".to_owned(),
            Self::ModuleReady(kind) => format!("ebike-toolkit:{}:ready", kind.tool_name()),
            Self::WishlistChanged { .. } => "ebike-wishlist:changed".to_owned(),
        }
    }

    /// `CustomEvent.detail` payload.
    #[must_use]
    pub fn detail(&self) -> Value {
        match self {
            Self::Ready { version, theme } => json!({ "version": version, "theme": theme.as_str() }),
            Self::ModuleReady(kind) => json!({ "module": kind.tool_name() }),
            Self::WishlistChanged { items } => json!({ "items": items, "count": items.len() }),
        }
    }
}

/// Destination for toolkit events.
pub trait EventSink {
    fn emit(&self, event: &ToolkitEvent);
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, event: &ToolkitEvent) {
        tracing::trace!(event = %event.name(), "event dropped");
    }
}

/// Keeps every event in order; used by tests and server-side rendering.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<ToolkitEvent>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<ToolkitEvent> {
        self.events.borrow().clone()
    }

    /// Event names in emission order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.events.borrow().iter().map(ToolkitEvent::name).collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &ToolkitEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
