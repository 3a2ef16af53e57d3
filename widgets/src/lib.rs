//! # widgets
//!
//! Leptos + WASM front end for the storefront e-bike toolkit. Finds every
//! `data-ebike-tool` container on the host page, binds it through the
//! `toolkit` core, and mounts one Leptos component per instance.
//!
//! Browser glue (`localStorage`, `CustomEvent` dispatch, timers, host JSON
//! blocks) is compiled only with the `csr` feature; every pure helper builds
//! and tests on the host.

pub mod boot;
pub mod components;
pub mod registry;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// Module entry point: installs logging and starts the toolkit unless the
/// page opted into manual initialization.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    boot::install_logging();
    if boot::manual_init_requested() {
        log::info!("manual init requested; waiting for ebikeToolkitInit()");
        return;
    }
    boot::start();
}

/// Start the toolkit on a page that set `data-ebike-toolkit-manual`.
#[cfg(feature = "csr")]
#[wasm_bindgen(js_name = ebikeToolkitInit)]
pub fn manual_init() {
    boot::start();
}

/// Re-scan the whole document for new containers.
#[cfg(feature = "csr")]
#[wasm_bindgen(js_name = ebikeToolkitScan)]
pub fn scan() {
    boot::scan_document();
}

/// Enable or disable one tool by its `data-ebike-tool` name.
#[cfg(feature = "csr")]
#[wasm_bindgen(js_name = ebikeToolkitToggleFeature)]
pub fn toggle_feature(tool: &str, enabled: bool) -> Result<(), JsValue> {
    boot::toggle_feature(tool, enabled).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Layer JSON config overrides over the current configuration.
#[cfg(feature = "csr")]
#[wasm_bindgen(js_name = ebikeToolkitUpdateConfig)]
pub fn update_config(overrides: &str) -> Result<(), JsValue> {
    boot::update_config(overrides).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Version, theme, loaded modules and effective config as JSON.
#[cfg(feature = "csr")]
#[wasm_bindgen(js_name = ebikeToolkitInfo)]
pub fn info() -> Result<String, JsValue> {
    boot::info_json().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Add a product to the shared wishlist. Resolves to whether it was new.
#[cfg(feature = "csr")]
#[wasm_bindgen(js_name = ebikeWishlistAdd)]
pub fn wishlist_add(id: &str, name: &str, price: f64) -> Result<bool, JsValue> {
    registry::with_toolkit(|toolkit| toolkit.add_to_wishlist(id, name, price))
        .unwrap_or(Err(toolkit::ToolkitError::ModuleNotLoaded(toolkit::module::ToolKind::Wishlist)))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
