//! Reading the host page: containers, theme markers, host JSON blocks, and
//! writing the stylesheet link and CSS custom properties.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core only sees plain descriptors ([`Mount`], [`PageMarkers`],
//! [`HostData`]). This module is the one place that walks the DOM to build
//! them, and the one place that writes toolkit-owned attributes back.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use toolkit::catalog::HostData;
use toolkit::config::ConfigOverrides;
use toolkit::mount::{Mount, TOOL_ATTRIBUTE};
use toolkit::theme::PageMarkers;

/// Selector matching every tool container.
pub const CONTAINER_SELECTOR: &str = "[data-ebike-tool]";
/// Presence of this attribute anywhere on the page disables auto-start.
pub const MANUAL_INIT_SELECTOR: &str = "[data-ebike-toolkit-manual]";
/// `<script type="application/json">` holding [`ConfigOverrides`].
pub const CONFIG_SCRIPT_ID: &str = "ebike-toolkit-config";
/// Attribute naming the provider section a JSON script overrides.
pub const DATA_ATTRIBUTE: &str = "data-ebike-data";

/// Build a [`Mount`] from a container's attributes. Non-`data-*` attributes
/// are dropped; `None` when the tool attribute is missing or blank.
pub fn mount_from_attributes<I, K, V>(attributes: I) -> Option<Mount>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut tool = None;
    let mut data = Vec::new();
    for (name, value) in attributes {
        let (name, value) = (name.as_ref(), value.as_ref());
        if !name.starts_with("data-") {
            continue;
        }
        if name == TOOL_ATTRIBUTE {
            tool = Some(value.trim().to_owned());
        }
        data.push((name.to_owned(), value.to_owned()));
    }
    let tool = tool.filter(|tool| !tool.is_empty())?;
    Some(data.into_iter().fold(Mount::new(&tool), |mount, (name, value)| mount.with_attribute(&name, &value)))
}

/// Markers from the `<body>` class attribute and the marker selectors that matched.
pub fn markers_from(body_class: &str, present: &[&str]) -> PageMarkers {
    let markers = body_class.split_whitespace().fold(PageMarkers::new(), PageMarkers::with_body_class);
    present.iter().fold(markers, |markers, selector| markers.with_selector(selector))
}

/// Parse the config script body. Blank or malformed JSON yields no overrides.
pub fn parse_overrides(raw: Option<&str>) -> ConfigOverrides {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return ConfigOverrides::default();
    };
    match ConfigOverrides::from_json(raw) {
        Ok(overrides) => overrides,
        Err(e) => {
            tracing::warn!(error = %e, "malformed toolkit config; using defaults");
            ConfigOverrides::default()
        }
    }
}

// =============================================================================
// BROWSER
// =============================================================================

#[cfg(feature = "csr")]
pub use browser::*;

#[cfg(feature = "csr")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement};

    use super::*;

    pub fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    pub fn manual_init_requested(document: &Document) -> bool {
        matches!(document.query_selector(MANUAL_INIT_SELECTOR), Ok(Some(_)))
    }

    /// Every element under `root` matching `selector`, in document order.
    fn select_all(root: &Element, selector: &str) -> Vec<Element> {
        let Ok(nodes) = root.query_selector_all(selector) else {
            tracing::warn!(selector, "invalid selector");
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn attributes(element: &Element) -> Vec<(String, String)> {
        let map = element.attributes();
        (0..map.length()).filter_map(|i| map.item(i)).map(|attr| (attr.name(), attr.value())).collect()
    }

    /// Tool containers under `root` (including `root` itself) with their descriptors.
    pub fn find_containers(root: &Element) -> Vec<(HtmlElement, Mount)> {
        let mut elements = Vec::new();
        if root.has_attribute(TOOL_ATTRIBUTE) {
            elements.push(root.clone());
        }
        elements.extend(select_all(root, CONTAINER_SELECTOR));
        elements
            .into_iter()
            .filter_map(|element| {
                let mount = mount_from_attributes(attributes(&element))?;
                let element = element.dyn_into::<HtmlElement>().ok()?;
                Some((element, mount))
            })
            .collect()
    }

    pub fn page_markers(document: &Document) -> PageMarkers {
        let body_class = document.body().map(|body| body.class_name()).unwrap_or_default();
        let Some(root) = document.document_element() else {
            return markers_from(&body_class, &[]);
        };
        let present: Vec<&str> = toolkit::theme::MARKER_SELECTORS
            .into_iter()
            .filter(|selector| matches!(root.query_selector(selector), Ok(Some(_))))
            .collect();
        markers_from(&body_class, &present)
    }

    /// Walk `window.<path>` through nested properties; `None` if any step is missing.
    fn global(path: &[&str]) -> Option<wasm_bindgen::JsValue> {
        let mut value: wasm_bindgen::JsValue = web_sys::window()?.into();
        for key in path {
            value = js_sys::Reflect::get(&value, &wasm_bindgen::JsValue::from_str(key)).ok()?;
            if value.is_undefined() || value.is_null() {
                return None;
            }
        }
        Some(value)
    }

    /// Overrides from the config script, else from `window.ebikeToolkitConfig`.
    pub fn read_overrides(document: &Document) -> ConfigOverrides {
        let script = document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|script| script.text_content());
        let raw = script.or_else(|| {
            let config = global(&["ebikeToolkitConfig"])?;
            js_sys::JSON::stringify(&config).ok().map(String::from)
        });
        parse_overrides(raw.as_deref())
    }

    /// `Shopify.routes.root` without its trailing slash, or empty.
    pub fn shop_root() -> String {
        global(&["Shopify", "routes", "root"])
            .and_then(|root| root.as_string())
            .map(|root| root.trim_end_matches('/').to_owned())
            .unwrap_or_default()
    }

    /// Provider sections supplied by `<script data-ebike-data="...">` blocks.
    pub fn read_host_data(document: &Document) -> HostData {
        let Some(root) = document.document_element() else {
            return HostData::new();
        };
        let sections: Vec<(String, String)> = select_all(&root, &format!("script[{DATA_ATTRIBUTE}]"))
            .into_iter()
            .filter_map(|script| Some((script.get_attribute(DATA_ATTRIBUTE)?, script.text_content()?)))
            .collect();
        HostData::from_sections(sections)
    }

    /// Add the toolkit stylesheet link once.
    pub fn inject_stylesheet(document: &Document, href: &str) {
        if document.get_element_by_id(toolkit::theme::STYLESHEET_ID).is_some() {
            return;
        }
        let link = match document.create_element("link") {
            Ok(element) => element,
            Err(e) => {
                tracing::warn!(error = ?e, "could not create stylesheet link");
                return;
            }
        };
        link.set_id(toolkit::theme::STYLESHEET_ID);
        set_attribute(&link, "rel", "stylesheet");
        set_attribute(&link, "href", href);
        if let Some(head) = document.head() {
            if let Err(e) = head.append_child(&link) {
                tracing::warn!(error = ?e, "could not attach stylesheet link");
            }
        }
    }

    /// Set `--ebike-*` custom properties on `<html>`.
    pub fn apply_css_variables(document: &Document, vars: &[(String, String)]) {
        let Some(root) = document.document_element().and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
            return;
        };
        let style = root.style();
        for (name, value) in vars {
            if let Err(e) = style.set_property(name, value) {
                tracing::warn!(property = %name, error = ?e, "could not set CSS variable");
            }
        }
    }

    pub fn set_attribute(element: &Element, name: &str, value: &str) {
        if let Err(e) = element.set_attribute(name, value) {
            tracing::warn!(attribute = name, error = ?e, "could not set attribute");
        }
    }
}
