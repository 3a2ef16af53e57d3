//! Dispatches toolkit events as `CustomEvent`s on `document`.
//!
//! Events bubble, so page code may listen on `document` or `window`.
//! Dispatch is queued as a task, so a listener calling back into the
//! toolkit never finds it mid-update.

#[cfg(test)]
#[path = "event_sink_test.rs"]
mod event_sink_test;

use serde_json::Value;
use toolkit::events::{EventSink, ToolkitEvent};

/// Event type the wishlist widgets listen for to stay in sync.
pub const WISHLIST_CHANGED: &str = "ebike-wishlist:changed";

#[derive(Clone, Copy, Debug, Default)]
pub struct DomEventSink;

/// `(type, detail JSON)` for one event.
pub fn encode(event: &ToolkitEvent) -> (String, String) {
    (event.name(), event.detail().to_string())
}

/// Item count carried by a wishlist-changed detail, if present.
pub fn wishlist_count(detail: &Value) -> Option<u64> {
    detail.get("count").and_then(Value::as_u64)
}

impl EventSink for DomEventSink {
    fn emit(&self, event: &ToolkitEvent) {
        let (name, detail) = encode(event);
        #[cfg(feature = "csr")]
        {
            // Listeners run after the emitting toolkit call has returned.
            leptos::task::spawn_local(async move {
                if let Err(e) = dispatch(&name, &detail) {
                    tracing::warn!(event = %name, error = ?e, "event dispatch failed");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            tracing::trace!(event = %name, detail = %detail, "event dropped outside the browser");
        }
    }
}

#[cfg(feature = "csr")]
fn dispatch(name: &str, detail: &str) -> Result<(), wasm_bindgen::JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
    let init = web_sys::CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&js_sys::JSON::parse(detail)?);
    let event = web_sys::CustomEvent::new_with_event_init_dict(name, &init)?;
    document.dispatch_event(&event)?;
    Ok(())
}
