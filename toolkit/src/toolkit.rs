//! Toolkit orchestrator.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`Toolkit`] exists per page. The widgets crate builds an
//! [`AppContext`] from browser-backed seams, calls [`Toolkit::init`] once, and
//! then hands every batch of containers it finds to [`Toolkit::scan`]. The
//! returned [`Binding`]s tell it which containers need a freshly mounted
//! component.
//!
//! DESIGN
//! ======
//! - The module table is fixed. Each enabled kind is initialized at most once,
//!   however many times it appears.
//! - A module that fails to initialize is logged and left out; the others
//!   still load and the ready event still fires.
//! - Instances are keyed by the id stored on the container, so scanning the
//!   same container twice reuses the existing instance.
//!
//! TRADE-OFFS
//! ==========
//! The toolkit keeps the original host overrides and the detected theme so a
//! later [`Toolkit::update_config`] can rebuild the whole config from its
//! layers instead of patching the effective values in place.

#[cfg(test)]
#[path = "toolkit_test.rs"]
mod toolkit_test;

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use time::OffsetDateTime;

use crate::blog::BlogState;
use crate::booking::service::ServiceWizard;
use crate::booking::test_ride::TestRideWizard;
use crate::calendar::Clock;
use crate::catalog::{DataProvider, DemoData};
use crate::comparison::ComparisonSelection;
use crate::config::{ConfigOverrides, ThemeSetting, ToolkitConfig};
use crate::dashboard::DashboardState;
use crate::error::ToolkitError;
use crate::events::{EventSink, NullSink, ToolkitEvent};
use crate::financing::FinancingForm;
use crate::module::{ToolInstance, ToolKind, ToolModule, ToolState};
use crate::mount::{InstanceSettings, Mount, generate_instance_id};
use crate::range::RangeForm;
use crate::sizing::SizingForm;
use crate::storage::{KeyValueStore, MemoryStore};
use crate::theme::{self, PageMarkers, Theme};
use crate::wishlist::Wishlist;

/// Modules in initialization order. Duplicates are skipped at load time.
const MODULE_TABLE: [ToolKind; 10] = [
    ToolKind::Comparison,
    ToolKind::Sizing,
    ToolKind::Financing,
    ToolKind::Wishlist,
    ToolKind::RangeCalculator,
    ToolKind::TestRideBooking,
    ToolKind::ServiceBooking,
    ToolKind::Comparison,
    ToolKind::DashboardManagement,
    ToolKind::BlogGenerator,
];

// =============================================================================
// CONTEXT
// =============================================================================

/// Wall clock backed by the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Everything a module needs from the page.
pub struct AppContext {
    pub config: ToolkitConfig,
    pub theme: Theme,
    /// Host overrides as received, before theme adaptation.
    pub overrides: ConfigOverrides,
    /// Theme found on the page, used when the config asks for auto-detection.
    pub detected_theme: Theme,
    pub store: Rc<dyn KeyValueStore>,
    pub events: Rc<dyn EventSink>,
    pub data: Rc<dyn DataProvider>,
    pub clock: Rc<dyn Clock>,
}

impl AppContext {
    #[must_use]
    pub fn new(
        overrides: ConfigOverrides,
        markers: &PageMarkers,
        store: Rc<dyn KeyValueStore>,
        events: Rc<dyn EventSink>,
        data: Rc<dyn DataProvider>,
        clock: Rc<dyn Clock>,
    ) -> Self {
        let detected_theme = theme::detect(markers);
        let theme = resolve_theme(&overrides, detected_theme);
        let config = ToolkitConfig::resolve(&overrides, theme);
        tracing::debug!(theme = %theme.as_str(), detected = %detected_theme.as_str(), "toolkit context built");
        Self { config, theme, overrides, detected_theme, store, events, data, clock }
    }

    /// Context with in-memory storage, no event listeners and demo data.
    #[must_use]
    pub fn detached(overrides: ConfigOverrides, clock: Rc<dyn Clock>) -> Self {
        Self::new(
            overrides,
            &PageMarkers::new(),
            Rc::new(MemoryStore::new()),
            Rc::new(NullSink),
            Rc::new(DemoData),
            clock,
        )
    }
}

fn resolve_theme(overrides: &ConfigOverrides, detected: Theme) -> Theme {
    let setting = overrides.theme.as_deref().map(ThemeSetting::parse).unwrap_or_default();
    match setting {
        ThemeSetting::Fixed(theme) => theme,
        ThemeSetting::AutoDetect => detected,
    }
}

// =============================================================================
// REPORTS
// =============================================================================

/// Outcome of [`Toolkit::init`].
#[derive(Debug, Default)]
pub struct InitReport {
    pub loaded: Vec<ToolKind>,
    pub failed: Vec<ToolkitError>,
}

/// A container matched to an instance by [`Toolkit::scan`].
#[derive(Clone, Debug)]
pub struct Binding {
    /// Index into the scanned mounts.
    pub mount: usize,
    pub instance: ToolInstance,
    /// `true` when the instance was created by this scan.
    pub created: bool,
    /// `true` when the container had no id and the host must store `instance.id` on it.
    pub assigned_id: bool,
}

/// Snapshot returned by [`Toolkit::info`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolkitInfo {
    pub version: &'static str,
    pub theme: Theme,
    pub modules: Vec<ToolKind>,
    pub config: ToolkitConfig,
}

impl ToolkitInfo {
    pub fn to_json(&self) -> Result<Value, ToolkitError> {
        let modules: Vec<&str> = self.modules.iter().map(|kind| kind.tool_name()).collect();
        Ok(json!({
            "version": self.version,
            "theme": self.theme.as_str(),
            "modules": modules,
            "config": serde_json::to_value(&self.config)?,
        }))
    }
}

// =============================================================================
// TOOLKIT
// =============================================================================

pub struct Toolkit {
    ctx: AppContext,
    modules: BTreeMap<ToolKind, ToolModule>,
    wishlist: Option<Wishlist>,
    rng: StdRng,
    initialized: bool,
}

impl Toolkit {
    /// `seed` feeds instance id generation and simulated availability.
    #[must_use]
    pub fn new(ctx: AppContext, seed: u64) -> Self {
        Self { ctx, modules: BTreeMap::new(), wishlist: None, rng: StdRng::seed_from_u64(seed), initialized: false }
    }

    #[must_use]
    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    #[must_use]
    pub fn config(&self) -> &ToolkitConfig {
        &self.ctx.config
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.ctx.theme
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Shared random source for widgets that simulate availability or drift.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Load every enabled module, then announce readiness. Calling it again is a no-op.
    pub fn init(&mut self) -> InitReport {
        if self.initialized {
            return InitReport::default();
        }
        let enabled: Vec<ToolKind> =
            MODULE_TABLE.into_iter().filter(|kind| self.ctx.config.features.is_enabled(*kind)).collect();
        let report = self.load_modules(&enabled);
        self.initialized = true;
        self.ctx.events.emit(&ToolkitEvent::Ready { version: crate::VERSION.to_owned(), theme: self.ctx.theme });
        tracing::info!(
            version = crate::VERSION,
            theme = %self.ctx.theme.as_str(),
            loaded = report.loaded.len(),
            failed = report.failed.len(),
            "toolkit initialized"
        );
        report
    }

    fn load_modules(&mut self, kinds: &[ToolKind]) -> InitReport {
        let mut report = InitReport::default();
        let mut attempted = BTreeSet::new();
        for &kind in kinds {
            if !attempted.insert(kind) || self.modules.contains_key(&kind) {
                continue;
            }
            match self.init_module(kind) {
                Ok(()) => {
                    self.modules.insert(kind, ToolModule::new(kind));
                    self.ctx.events.emit(&ToolkitEvent::ModuleReady(kind));
                    report.loaded.push(kind);
                }
                Err(e) => {
                    tracing::error!(module = %kind, error = %e, "module failed to initialize");
                    report.failed.push(e);
                }
            }
        }
        report
    }

    fn init_module(&mut self, kind: ToolKind) -> Result<(), ToolkitError> {
        let fail = |reason: &str| ToolkitError::ModuleInit { module: kind, reason: reason.to_owned() };
        match kind {
            ToolKind::Wishlist => {
                let wishlist = Wishlist::load(Rc::clone(&self.ctx.store), Rc::clone(&self.ctx.events))
                    .map_err(|e| fail(&e.to_string()))?;
                self.wishlist = Some(wishlist);
            }
            ToolKind::Comparison if self.ctx.data.bikes().is_empty() => return Err(fail("bike catalog is empty")),
            ToolKind::RangeCalculator if self.ctx.data.range_specs().is_empty() => {
                return Err(fail("no bikes with range data"));
            }
            _ => {}
        }
        Ok(())
    }

    #[must_use]
    pub fn is_loaded(&self, kind: ToolKind) -> bool {
        self.modules.contains_key(&kind)
    }

    #[must_use]
    pub fn module(&self, kind: ToolKind) -> Option<&ToolModule> {
        self.modules.get(&kind)
    }

    #[must_use]
    pub fn loaded_modules(&self) -> Vec<ToolKind> {
        self.modules.keys().copied().collect()
    }

    // -------------------------------------------------------------------------
    // Instances
    // -------------------------------------------------------------------------

    /// Bind every mount whose tool is loaded. Mounts that already carry a
    /// bound id come back with `created == false`.
    pub fn scan(&mut self, mounts: &[Mount]) -> Vec<Binding> {
        let mut bindings = Vec::new();
        for (index, mount) in mounts.iter().enumerate() {
            let kind = match mount.tool.parse::<ToolKind>() {
                Ok(kind) => kind,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping container");
                    continue;
                }
            };
            match self.bind_mount(kind, mount) {
                Ok((instance, created, assigned_id)) => {
                    bindings.push(Binding { mount: index, instance, created, assigned_id });
                }
                Err(e) => tracing::debug!(error = %e, "skipping container"),
            }
        }
        bindings
    }

    fn bind_mount(&mut self, kind: ToolKind, mount: &Mount) -> Result<(ToolInstance, bool, bool), ToolkitError> {
        let existing = mount.existing_id(kind).map(str::to_owned);
        let Some(module) = self.modules.get(&kind) else {
            return Err(ToolkitError::ModuleNotLoaded(kind));
        };
        if let Some(instance) = existing.as_deref().and_then(|id| module.instance(id)) {
            return Ok((instance.clone(), false, false));
        }

        let assigned_id = existing.is_none();
        let id = match existing {
            Some(id) => id,
            None => generate_instance_id(kind.id_prefix(), self.ctx.clock.now_millis(), &mut self.rng),
        };
        let settings = InstanceSettings::from_mount(mount);
        let state = initial_state(kind, &settings, &self.ctx);
        let instance = ToolInstance { id, kind, settings, state };
        if let Some(module) = self.modules.get_mut(&kind) {
            module.bind(instance.clone());
        }
        Ok((instance, true, assigned_id))
    }

    /// Instances are keyed per tool; two tools may share an id attribute value.
    #[must_use]
    pub fn instance(&self, kind: ToolKind, id: &str) -> Option<&ToolInstance> {
        self.modules.get(&kind).and_then(|module| module.instance(id))
    }

    /// Forget one instance, e.g. when its container leaves the page.
    pub fn unbind(&mut self, kind: ToolKind, id: &str) -> Option<ToolInstance> {
        self.modules.get_mut(&kind).and_then(|module| module.unbind(id))
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Enable or disable one module at runtime. Returns the ids of instances
    /// torn down by a disable.
    pub fn toggle_feature(&mut self, kind: ToolKind, enabled: bool) -> Result<Vec<String>, ToolkitError> {
        if enabled {
            if self.initialized && !self.is_loaded(kind) {
                if let Some(e) = self.load_modules(&[kind]).failed.into_iter().next() {
                    return Err(e);
                }
            }
            self.ctx.config.features.set(kind, true);
            tracing::info!(module = %kind, "feature enabled");
            return Ok(Vec::new());
        }
        self.ctx.config.features.set(kind, false);
        let removed = self.modules.remove(&kind).map(|mut module| module.destroy()).unwrap_or_default();
        if kind == ToolKind::Wishlist {
            self.wishlist = None;
        }
        tracing::info!(module = %kind, instances = removed.len(), "feature disabled");
        Ok(removed)
    }

    /// Layer `overrides` over the current host overrides and rebuild the config.
    pub fn update_config(&mut self, overrides: &ConfigOverrides) {
        let merged = self.ctx.overrides.merged(overrides);
        let theme = resolve_theme(&merged, self.ctx.detected_theme);
        self.ctx.config = ToolkitConfig::resolve(&merged, theme);
        self.ctx.overrides = merged;
        self.ctx.theme = theme;
        tracing::info!(theme = %theme.as_str(), "config updated");
    }

    #[must_use]
    pub fn info(&self) -> ToolkitInfo {
        ToolkitInfo {
            version: crate::VERSION,
            theme: self.ctx.theme,
            modules: self.loaded_modules(),
            config: self.ctx.config.clone(),
        }
    }

    #[must_use]
    pub fn map_classes(&self, classes: &str) -> String {
        self.ctx.config.map_classes(classes)
    }

    #[must_use]
    pub fn css_variables(&self) -> Vec<(String, String)> {
        theme::css_variables(&self.ctx.config.branding, self.ctx.theme)
    }

    #[must_use]
    pub fn stylesheet_href(&self, shop_root: &str) -> String {
        theme::stylesheet_href(shop_root, crate::VERSION)
    }

    // -------------------------------------------------------------------------
    // Wishlist
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn wishlist(&self) -> Option<&Wishlist> {
        self.wishlist.as_ref()
    }

    pub fn add_to_wishlist(&mut self, id: &str, name: &str, price: f64) -> Result<bool, ToolkitError> {
        let now = self.ctx.clock.now();
        let wishlist = self.wishlist.as_mut().ok_or(ToolkitError::ModuleNotLoaded(ToolKind::Wishlist))?;
        wishlist.add(id, name, price, now)
    }

    pub fn remove_from_wishlist(&mut self, id: &str) -> Result<bool, ToolkitError> {
        let wishlist = self.wishlist.as_mut().ok_or(ToolkitError::ModuleNotLoaded(ToolKind::Wishlist))?;
        wishlist.remove(id)
    }
}

/// Starting state for a new instance of `kind`.
#[must_use]
pub fn initial_state(kind: ToolKind, settings: &InstanceSettings, ctx: &AppContext) -> ToolState {
    let data = &ctx.data;
    match kind {
        ToolKind::Sizing => ToolState::Sizing(SizingForm::default()),
        ToolKind::Financing => ToolState::Financing(FinancingForm::default()),
        ToolKind::Wishlist => ToolState::Wishlist,
        ToolKind::RangeCalculator => ToolState::Range(RangeForm::for_units(settings.units)),
        ToolKind::TestRideBooking => ToolState::TestRide(Box::new(TestRideWizard::new(data.test_ride_locations()))),
        ToolKind::ServiceBooking => {
            ToolState::Service(Box::new(ServiceWizard::new(data.service_packages(), data.service_locations())))
        }
        ToolKind::Comparison => ToolState::Comparison(ComparisonSelection::new(settings.max_bikes)),
        ToolKind::DashboardManagement => {
            ToolState::Dashboard(Box::new(DashboardState::new(data.vendors(), data.performance(), ctx.clock.now())))
        }
        ToolKind::BlogGenerator => {
            ToolState::Blog(Box::new(BlogState::new(data.feed_sources(), data.content_templates(), ctx.clock.now())))
        }
    }
}
