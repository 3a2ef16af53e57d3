//! Tool kinds and per-module instance bookkeeping.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every tool is a sibling registered by [`ToolKind`]. A loaded tool owns a
//! [`ToolModule`], which tracks the containers bound to it as
//! [`ToolInstance`]s keyed by instance id. The orchestrator in
//! [`crate::toolkit`] decides which modules load; this file only knows how a
//! single module binds, unbinds and tears down.
//!
//! DESIGN
//! ======
//! Instances carry their starting [`ToolState`]. The widget layer seeds its
//! reactive signals from that state and owns every later change, so the core
//! never holds a second copy of live form values.

#[cfg(test)]
#[path = "module_test.rs"]
mod module_test;

use std::fmt;
use std::str::FromStr;

use crate::blog::BlogState;
use crate::booking::service::ServiceWizard;
use crate::booking::test_ride::TestRideWizard;
use crate::comparison::ComparisonSelection;
use crate::dashboard::DashboardState;
use crate::error::ToolkitError;
use crate::financing::FinancingForm;
use crate::mount::InstanceSettings;
use crate::range::RangeForm;
use crate::sizing::SizingForm;

/// Every tool the toolkit can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ToolKind {
    Sizing,
    Financing,
    Wishlist,
    RangeCalculator,
    TestRideBooking,
    ServiceBooking,
    Comparison,
    DashboardManagement,
    BlogGenerator,
}

impl ToolKind {
    pub const ALL: [Self; 9] = [
        Self::Sizing,
        Self::Financing,
        Self::Wishlist,
        Self::RangeCalculator,
        Self::TestRideBooking,
        Self::ServiceBooking,
        Self::Comparison,
        Self::DashboardManagement,
        Self::BlogGenerator,
    ];

    /// Value of `data-ebike-tool` for this tool.
    #[must_use]
    pub fn tool_name(self) -> &'static str {
        match self {
            Self::Sizing => "sizing",
            Self::Financing => "financing",
            Self::Wishlist => "wishlist",
            Self::RangeCalculator => "rangeCalculator",
            Self::TestRideBooking => "testRideBooking",
            Self::ServiceBooking => "serviceBooking",
            Self::Comparison => "comparison",
            Self::DashboardManagement => "dashboardManagement",
            Self::BlogGenerator => "blogGenerator",
        }
    }

    /// Container attribute that stores the instance id.
    #[must_use]
    pub fn id_attribute(self) -> &'static str {
        match self {
            Self::Sizing | Self::Financing | Self::RangeCalculator => "data-calculator-id",
            Self::Wishlist => "data-wishlist-id",
            Self::TestRideBooking => "data-booking-id",
            Self::ServiceBooking => "data-service-id",
            Self::Comparison => "data-comparison-id",
            Self::DashboardManagement => "data-dashboard-id",
            Self::BlogGenerator => "data-generator-id",
        }
    }

    /// Prefix of generated instance ids.
    #[must_use]
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Sizing => "calculator",
            Self::Financing => "financing",
            Self::Wishlist => "wishlist",
            Self::RangeCalculator => "range_calc",
            Self::TestRideBooking => "test_ride",
            Self::ServiceBooking => "service",
            Self::Comparison => "adv_comp",
            Self::DashboardManagement => "dashboard",
            Self::BlogGenerator => "blog_gen",
        }
    }

    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Sizing => "Find Your Perfect Size",
            Self::Financing => "0% Financing Calculator",
            Self::Wishlist => "Your Wishlist",
            Self::RangeCalculator => "Range Calculator",
            Self::TestRideBooking => "Book a Test Ride",
            Self::ServiceBooking => "E-Bike Service Booking",
            Self::Comparison => "E-Bike Comparison",
            Self::DashboardManagement => "VeloConnect Dashboard",
            Self::BlogGenerator => "AI Blog Content Generator",
        }
    }

    /// Default subheading; empty for tools that show none.
    #[must_use]
    pub fn default_subtitle(self) -> &'static str {
        match self {
            Self::Sizing => "Enter your measurements for personalized recommendations",
            Self::Financing => "Calculate your monthly payments",
            Self::RangeCalculator => "Estimate your e-bike range based on real conditions",
            Self::TestRideBooking => "Try before you buy at one of our locations",
            Self::Comparison => "Compare bikes with detailed analysis",
            Self::Wishlist | Self::ServiceBooking | Self::DashboardManagement | Self::BlogGenerator => "",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_name())
    }
}

impl FromStr for ToolKind {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tool_name() == s)
            .ok_or_else(|| ToolkitError::UnknownTool(s.to_owned()))
    }
}

/// Starting state of one instance, by tool.
#[derive(Clone, Debug)]
pub enum ToolState {
    Sizing(SizingForm),
    Financing(FinancingForm),
    /// The wishlist is shared by every instance and lives on the toolkit.
    Wishlist,
    Range(RangeForm),
    TestRide(Box<TestRideWizard>),
    Service(Box<ServiceWizard>),
    Comparison(ComparisonSelection),
    Dashboard(Box<DashboardState>),
    Blog(Box<BlogState>),
}

impl ToolState {
    #[must_use]
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Sizing(_) => ToolKind::Sizing,
            Self::Financing(_) => ToolKind::Financing,
            Self::Wishlist => ToolKind::Wishlist,
            Self::Range(_) => ToolKind::RangeCalculator,
            Self::TestRide(_) => ToolKind::TestRideBooking,
            Self::Service(_) => ToolKind::ServiceBooking,
            Self::Comparison(_) => ToolKind::Comparison,
            Self::Dashboard(_) => ToolKind::DashboardManagement,
            Self::Blog(_) => ToolKind::BlogGenerator,
        }
    }
}

/// One bound container.
#[derive(Clone, Debug)]
pub struct ToolInstance {
    pub id: String,
    pub kind: ToolKind,
    pub settings: InstanceSettings,
    pub state: ToolState,
}

/// A loaded tool module and the instances bound to it.
#[derive(Debug)]
pub struct ToolModule {
    kind: ToolKind,
    instances: Vec<ToolInstance>,
}

impl ToolModule {
    #[must_use]
    pub fn new(kind: ToolKind) -> Self {
        Self { kind, instances: Vec::new() }
    }

    #[must_use]
    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    #[must_use]
    pub fn instance(&self, id: &str) -> Option<&ToolInstance> {
        self.instances.iter().find(|instance| instance.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.instance(id).is_some()
    }

    pub fn instances(&self) -> impl Iterator<Item = &ToolInstance> {
        self.instances.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Register `instance`. Returns `false` and keeps the existing one if the
    /// id is already bound.
    pub fn bind(&mut self, instance: ToolInstance) -> bool {
        if self.contains(&instance.id) {
            return false;
        }
        tracing::debug!(module = %self.kind, instance_id = %instance.id, "instance bound");
        self.instances.push(instance);
        true
    }

    /// Remove one instance, returning it if it was bound.
    pub fn unbind(&mut self, id: &str) -> Option<ToolInstance> {
        let index = self.instances.iter().position(|instance| instance.id == id)?;
        tracing::debug!(module = %self.kind, instance_id = %id, "instance unbound");
        Some(self.instances.remove(index))
    }

    /// Drop every instance; returns their ids so the host can clear containers.
    pub fn destroy(&mut self) -> Vec<String> {
        self.instances.drain(..).map(|instance| instance.id).collect()
    }
}
