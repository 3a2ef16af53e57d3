//! Data providers: bikes, range specs, locations, service packages, vendors,
//! blog feeds.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tools never embed their own data. They ask a [`DataProvider`] at instance
//! creation. [`DemoData`] returns the built-in storefront catalog;
//! [`HostData`] layers sections the host page supplied as JSON over it, so a
//! real backend can be swapped in without touching any tool.
//!
//! TRADE-OFFS
//! ==========
//! A malformed or empty host section is logged and ignored rather than
//! surfaced; the tool keeps working on demo data.

mod demo;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use demo::DemoData;

// =============================================================================
// BIKES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BikeRecord {
    pub key: String,
    pub name: String,
    pub brand: String,
    pub price: u32,
    pub category: String,
    #[serde(default)]
    pub image: String,
    pub motor: Motor,
    pub battery: Battery,
    pub frame: Frame,
    pub components: Components,
    pub features: Features,
    pub scores: Scores,
    pub ai_insights: AiInsights,
    pub reviews: Reviews,
}

impl BikeRecord {
    /// Mean of comfort, performance and value-for-money.
    #[must_use]
    pub fn overall_score(&self) -> f64 {
        (self.scores.comfort + self.scores.performance + self.scores.value_for_money) / 3.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Motor {
    pub brand: String,
    pub model: String,
    pub power: u32,
    pub torque: u32,
    pub position: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battery {
    pub capacity: u32,
    pub brand: String,
    pub range: String,
    pub removable: bool,
    pub charging_time: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub material: String,
    pub size: String,
    pub weight: f64,
    pub geometry: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Components {
    pub gears: String,
    pub brakes: String,
    pub suspension: String,
    pub wheels: String,
    pub display: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub lights: String,
    pub mudguards: String,
    pub rack: String,
    pub kickstand: String,
    pub lock_prep: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub comfort: f64,
    pub performance: f64,
    pub value_for_money: f64,
    pub durability: f64,
    pub ease_of_use: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsights {
    pub best_for: Vec<String>,
    pub terrain_suitability: Vec<String>,
    pub user_experience: String,
    pub maintenance_level: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reviews {
    pub rating: f64,
    pub count: u32,
    pub highlights: Vec<String>,
    pub concerns: Vec<String>,
}

// =============================================================================
// RANGE, LOCATIONS, SERVICE
// =============================================================================

/// Battery and consumption figures used by the range calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSpec {
    pub key: String,
    pub name: String,
    /// Battery capacity in Wh.
    pub battery_capacity: f64,
    /// Wh per km at tour assist on flat ground.
    pub base_consumption: f64,
    #[serde(default)]
    pub efficiency: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRideLocation {
    pub key: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePackage {
    pub key: String,
    pub name: String,
    /// CHF.
    pub price: u32,
    /// Minutes.
    pub duration: u32,
    pub description: String,
    pub included: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLocation {
    pub key: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
    /// Keys of the packages this location offers.
    pub services: Vec<String>,
}

impl ServiceLocation {
    #[must_use]
    pub fn offers(&self, package: &str) -> bool {
        self.services.iter().any(|service| service == package)
    }
}

// =============================================================================
// VENDORS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    Connected,
    Warning,
    Error,
    Maintenance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Success,
    PartialFailure,
    Maintenance,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointStatus {
    Healthy,
    Warning,
    Error,
    Maintenance,
}

impl VendorStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Maintenance => "maintenance",
        }
    }
}

impl SyncStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::PartialFailure => "partial_failure",
            Self::Maintenance => "maintenance",
            Self::Failed => "failed",
        }
    }
}

impl EndpointStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Maintenance => "maintenance",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorMetrics {
    pub total_products: u32,
    pub synced_today: u32,
    pub failed_syncs: u32,
    /// Milliseconds.
    pub avg_response_time: u32,
    /// Percent of the vendor's rate limit in use.
    pub rate_limit_used: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointHealth {
    pub name: String,
    pub status: EndpointStatus,
    pub response_time: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    pub key: String,
    pub name: String,
    pub status: VendorStatus,
    pub api_url: String,
    /// Seconds between the last sync and dashboard start.
    #[serde(default)]
    pub last_sync_secs_ago: u32,
    pub sync_status: SyncStatus,
    pub metrics: VendorMetrics,
    pub endpoints: Vec<EndpointHealth>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceData {
    pub total_api_calls: u32,
    pub successful_calls: u32,
    pub failed_calls: u32,
    pub average_response_time: u32,
    pub data_transferred: String,
    pub uptime: String,
}

// =============================================================================
// BLOG
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTemplate {
    pub key: String,
    pub structure: Vec<String>,
    pub tone: String,
    /// Target word count range, e.g. `800-1200`.
    pub length: String,
}

// =============================================================================
// PROVIDERS
// =============================================================================

/// Source of every catalog section a tool can ask for.
pub trait DataProvider {
    fn bikes(&self) -> Vec<BikeRecord>;
    fn range_specs(&self) -> Vec<RangeSpec>;
    fn test_ride_locations(&self) -> Vec<TestRideLocation>;
    fn service_packages(&self) -> Vec<ServicePackage>;
    fn service_locations(&self) -> Vec<ServiceLocation>;
    fn vendors(&self) -> Vec<VendorRecord>;
    fn performance(&self) -> PerformanceData;
    fn feed_sources(&self) -> Vec<FeedSource>;
    fn content_templates(&self) -> Vec<ContentTemplate>;
}

/// Host-page section names accepted by [`HostData::with_section`].
pub const HOST_SECTIONS: [&str; 7] = [
    "bikes",
    "rangeSpecs",
    "testRideLocations",
    "servicePackages",
    "serviceLocations",
    "vendors",
    "feedSources",
];

/// Demo data with per-section overrides from the host page.
#[derive(Clone, Debug, Default)]
pub struct HostData {
    demo: DemoData,
    bikes: Option<Vec<BikeRecord>>,
    range_specs: Option<Vec<RangeSpec>>,
    test_ride_locations: Option<Vec<TestRideLocation>>,
    service_packages: Option<Vec<ServicePackage>>,
    service_locations: Option<Vec<ServiceLocation>>,
    vendors: Option<Vec<VendorRecord>>,
    feed_sources: Option<Vec<FeedSource>>,
}

fn parse_section<T: DeserializeOwned>(section: &str, raw: &str) -> Option<Vec<T>> {
    match serde_json::from_str::<Vec<T>>(raw) {
        Ok(items) if items.is_empty() => {
            tracing::warn!(section, "host data section is empty; using demo data");
            None
        }
        Ok(items) => Some(items),
        Err(e) => {
            tracing::warn!(section, error = %e, "malformed host data section; using demo data");
            None
        }
    }
}

impl HostData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one host section (a JSON array). Unknown section names are
    /// logged and ignored.
    #[must_use]
    pub fn with_section(mut self, section: &str, raw: &str) -> Self {
        match section {
            "bikes" => self.bikes = parse_section(section, raw),
            "rangeSpecs" => self.range_specs = parse_section(section, raw),
            "testRideLocations" => self.test_ride_locations = parse_section(section, raw),
            "servicePackages" => self.service_packages = parse_section(section, raw),
            "serviceLocations" => self.service_locations = parse_section(section, raw),
            "vendors" => self.vendors = parse_section(section, raw),
            "feedSources" => self.feed_sources = parse_section(section, raw),
            other => tracing::warn!(section = other, "unknown host data section"),
        }
        self
    }

    /// Build from `(section, json)` pairs.
    pub fn from_sections<I, K, V>(sections: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        sections
            .into_iter()
            .fold(Self::new(), |data, (section, raw)| data.with_section(section.as_ref(), raw.as_ref()))
    }
}

impl DataProvider for HostData {
    fn bikes(&self) -> Vec<BikeRecord> {
        self.bikes.clone().unwrap_or_else(|| self.demo.bikes())
    }

    fn range_specs(&self) -> Vec<RangeSpec> {
        self.range_specs.clone().unwrap_or_else(|| self.demo.range_specs())
    }

    fn test_ride_locations(&self) -> Vec<TestRideLocation> {
        self.test_ride_locations.clone().unwrap_or_else(|| self.demo.test_ride_locations())
    }

    fn service_packages(&self) -> Vec<ServicePackage> {
        self.service_packages.clone().unwrap_or_else(|| self.demo.service_packages())
    }

    fn service_locations(&self) -> Vec<ServiceLocation> {
        self.service_locations.clone().unwrap_or_else(|| self.demo.service_locations())
    }

    fn vendors(&self) -> Vec<VendorRecord> {
        self.vendors.clone().unwrap_or_else(|| self.demo.vendors())
    }

    fn performance(&self) -> PerformanceData {
        self.demo.performance()
    }

    fn feed_sources(&self) -> Vec<FeedSource> {
        self.feed_sources.clone().unwrap_or_else(|| self.demo.feed_sources())
    }

    fn content_templates(&self) -> Vec<ContentTemplate> {
        self.demo.content_templates()
    }
}
