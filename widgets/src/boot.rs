//! Toolkit start-up, page scanning, and the JS-facing control surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` builds the [`AppContext`] from the page (config script, theme
//! markers, host data blocks, `localStorage`, `document` events), installs the
//! toolkit in the [`registry`], loads every enabled module, and schedules the
//! first scan. Later scans run on `popstate` and on theme-editor section
//! loads, scoped to the section.
//!
//! DESIGN
//! ======
//! Scanning is two-phase: the core binds mounts and returns [`Binding`]s,
//! then [`plan_mounts`] decides which containers still need a view. Only the
//! second phase touches the DOM, so the decision logic tests on the host.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use std::collections::HashSet;

use toolkit::ToolkitError;
use toolkit::config::ConfigOverrides;
use toolkit::module::{ToolInstance, ToolKind};
use toolkit::toolkit::Binding;

use crate::registry;

/// Delay before scanning after load or navigation.
pub const SCAN_DELAY_MS: u32 = 100;

#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("toolkit is not started or is busy")]
    Unavailable,
    #[error("invalid config overrides: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Toolkit(#[from] ToolkitError),
}

/// One container that needs a view after a scan.
#[derive(Debug)]
pub struct MountPlan {
    /// Index into the scanned mounts.
    pub container: usize,
    /// Id attribute to write back when the toolkit generated the id.
    pub write_id: Option<(&'static str, String)>,
    pub instance: ToolInstance,
}

/// Keep bindings whose instance has no live view yet. An instance bound to
/// several containers in one scan is mounted into the first only. Instances
/// are told apart by tool and id together.
pub fn plan_mounts(bindings: Vec<Binding>, is_mounted: impl Fn(ToolKind, &str) -> bool) -> Vec<MountPlan> {
    let mut seen = HashSet::new();
    bindings
        .into_iter()
        .filter(|binding| seen.insert((binding.instance.kind, binding.instance.id.clone())))
        .filter(|binding| binding.created || !is_mounted(binding.instance.kind, &binding.instance.id))
        .map(|binding| MountPlan {
            container: binding.mount,
            write_id: binding
                .assigned_id
                .then(|| (binding.instance.kind.id_attribute(), binding.instance.id.clone())),
            instance: binding.instance,
        })
        .collect()
}

// =============================================================================
// CONTROL SURFACE
// =============================================================================

/// Enable or disable one tool. Disabling unmounts its views; enabling
/// re-scans the page.
pub fn toggle_feature(tool: &str, enabled: bool) -> Result<(), BootError> {
    let kind: ToolKind = tool.parse()?;
    let removed = registry::with_toolkit(|toolkit| toolkit.toggle_feature(kind, enabled)).ok_or(BootError::Unavailable)??;
    for id in &removed {
        registry::unmount(kind, id);
    }
    tracing::info!(module = %kind, enabled, unmounted = removed.len(), "feature toggled");
    #[cfg(feature = "csr")]
    {
        if enabled {
            scan_document();
        }
    }
    Ok(())
}

/// Layer JSON overrides over the current config and refresh CSS variables.
pub fn update_config(raw: &str) -> Result<(), BootError> {
    let overrides = ConfigOverrides::from_json(raw)?;
    let vars = registry::with_toolkit(|toolkit| {
        toolkit.update_config(&overrides);
        toolkit.css_variables()
    })
    .ok_or(BootError::Unavailable)?;
    #[cfg(feature = "csr")]
    {
        if let Some(document) = crate::util::dom::document() {
            crate::util::dom::apply_css_variables(&document, &vars);
        }
    }
    tracing::debug!(variables = vars.len(), "css variables refreshed");
    Ok(())
}

pub fn info_json() -> Result<String, BootError> {
    let info = registry::with_toolkit(|toolkit| toolkit.info().to_json()).ok_or(BootError::Unavailable)??;
    Ok(info.to_string())
}

// =============================================================================
// BROWSER
// =============================================================================

#[cfg(feature = "csr")]
pub use browser::*;

#[cfg(feature = "csr")]
mod browser {
    use std::rc::Rc;

    use leptos::prelude::*;
    use toolkit::calendar::Clock;
    use toolkit::mount::Mount;
    use toolkit::{AppContext, Toolkit};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Element, HtmlElement};

    use super::*;
    use crate::components::ToolWidget;
    use crate::util::clock::JsClock;
    use crate::util::dom;
    use crate::util::event_sink::DomEventSink;
    use crate::util::timer;
    use crate::util::web_storage::LocalStore;

    pub fn install_logging() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }

    pub fn manual_init_requested() -> bool {
        dom::document().is_some_and(|document| dom::manual_init_requested(&document))
    }

    /// Build, install and initialize the toolkit. A second call is a no-op.
    pub fn start() {
        if registry::is_installed() {
            tracing::debug!("toolkit already started");
            return;
        }
        let Some(document) = dom::document() else {
            tracing::error!("no document; toolkit not started");
            return;
        };
        let ctx = AppContext::new(
            dom::read_overrides(&document),
            &dom::page_markers(&document),
            Rc::new(LocalStore),
            Rc::new(DomEventSink),
            Rc::new(dom::read_host_data(&document)),
            Rc::new(JsClock),
        );
        registry::install(Toolkit::new(ctx, JsClock.now_millis()));

        let Some((report, href, vars)) = registry::with_toolkit(|toolkit| {
            let report = toolkit.init();
            (report, toolkit.stylesheet_href(&dom::shop_root()), toolkit.css_variables())
        }) else {
            return;
        };
        dom::inject_stylesheet(&document, &href);
        dom::apply_css_variables(&document, &vars);
        tracing::info!(loaded = report.loaded.len(), failed = report.failed.len(), "toolkit started");

        listen_for_navigation(&document);
        timer::after(SCAN_DELAY_MS, scan_document);
    }

    pub fn scan_document() {
        if let Some(root) = dom::document().and_then(|document| document.document_element()) {
            scan_root(&root);
        }
    }

    /// Bind and mount every container under `root`.
    fn scan_root(root: &Element) {
        let containers = dom::find_containers(root);
        if containers.is_empty() {
            return;
        }
        let mounts: Vec<Mount> = containers.iter().map(|(_, mount)| mount.clone()).collect();
        let Some(bindings) = registry::with_toolkit(|toolkit| toolkit.scan(&mounts)) else {
            return;
        };
        for plan in plan_mounts(bindings, registry::is_mounted) {
            let Some((element, _)) = containers.get(plan.container) else {
                continue;
            };
            if let Some((name, id)) = &plan.write_id {
                dom::set_attribute(element, name, id);
            }
            mount_instance(element.clone(), plan.instance);
        }
    }

    /// Unmount and unbind every container under `root`.
    fn release_root(root: &Element) {
        for (_, mount) in dom::find_containers(root) {
            let Ok(kind) = mount.tool.parse::<ToolKind>() else {
                continue;
            };
            let Some(id) = mount.existing_id(kind) else {
                continue;
            };
            registry::unmount(kind, id);
            registry::with_toolkit(|toolkit| toolkit.unbind(kind, id));
        }
    }

    fn mount_instance(element: HtmlElement, instance: ToolInstance) {
        let (kind, id) = (instance.kind, instance.id.clone());
        element.set_inner_html("");
        let handle = leptos::mount::mount_to(element, move || view! { <ToolWidget instance=instance /> });
        registry::keep_mounted(kind, &id, Box::new(handle));
        tracing::debug!(module = %kind, instance_id = %id, "widget mounted");
    }

    fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            tracing::warn!(event, error = ?e, "could not add listener");
        }
        // Page-lifetime listener.
        closure.forget();
    }

    fn event_element(event: &web_sys::Event) -> Option<Element> {
        event.target().and_then(|target| target.dyn_into::<Element>().ok())
    }

    fn listen_for_navigation(document: &web_sys::Document) {
        if let Some(window) = web_sys::window() {
            listen(&window, "popstate", |_| timer::after(SCAN_DELAY_MS, scan_document));
        }
        listen(document, "shopify:section:load", |event| {
            if let Some(section) = event_element(&event) {
                timer::after(SCAN_DELAY_MS, move || scan_root(&section));
            }
        });
        listen(document, "shopify:section:unload", |event| {
            if let Some(section) = event_element(&event) {
                release_root(&section);
            }
        });
    }
}
