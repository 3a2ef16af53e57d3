//! Side-by-side bike comparison.
//!
//! A [`ComparisonSelection`] holds a fixed number of slots, each empty or
//! naming a catalog key. Everything else in this module is a pure function
//! of the selection and the catalog: the spec table, the per-bike headers,
//! the analysis cards and the share/export payloads.

#[cfg(test)]
#[path = "comparison_test.rs"]
mod comparison_test;

use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;

use crate::catalog::BikeRecord;
use crate::error::ToolkitError;
use crate::mount::MAX_BIKES_LIMIT;

/// Active selections needed before results are shown.
pub const MIN_BIKES: usize = 2;

pub const EXPORT_SOURCE: &str = "Godspeed E-Bike Comparison Tool";
pub const EXPORT_SUCCESS: &str = "Comparison exported! (Feature would generate PDF in production)";

const EMPTY_CELL: &str = "-";

// =============================================================================
// SELECTION
// =============================================================================

/// Sparse, ordered slots of catalog keys. The same key may occupy several slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonSelection {
    slots: Vec<Option<String>>,
}

impl ComparisonSelection {
    /// At most [`MAX_BIKES_LIMIT`] slots are allocated.
    #[must_use]
    pub fn new(max_bikes: usize) -> Self {
        Self { slots: vec![None; max_bikes.min(MAX_BIKES_LIMIT)] }
    }

    #[must_use]
    pub fn max_bikes(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(Option::as_deref)
    }

    /// Put `key` in `slot`; an empty key clears it. Out-of-range slots are ignored.
    pub fn select(&mut self, slot: usize, key: &str) {
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = if key.is_empty() { None } else { Some(key.to_owned()) };
        }
    }

    pub fn clear(&mut self, slot: usize) {
        self.select(slot, "");
    }

    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Filled slots in slot order.
    #[must_use]
    pub fn active(&self) -> Vec<&str> {
        self.slots.iter().filter_map(Option::as_deref).collect()
    }

    #[must_use]
    pub fn has_results(&self) -> bool {
        self.active().len() >= MIN_BIKES
    }

    /// Catalog records for the filled slots; keys missing from the catalog are skipped.
    #[must_use]
    pub fn active_bikes<'a>(&self, catalog: &'a [BikeRecord]) -> Vec<&'a BikeRecord> {
        self.active().into_iter().filter_map(|key| find(catalog, key)).collect()
    }

    /// Header per slot; `None` for empty slots.
    #[must_use]
    pub fn headers(&self, catalog: &[BikeRecord]) -> Vec<Option<BikeHeader>> {
        self.slots
            .iter()
            .map(|slot| slot.as_deref().and_then(|key| find(catalog, key)).map(BikeHeader::from))
            .collect()
    }

    /// Spec table with one cell per slot.
    #[must_use]
    pub fn table(&self, catalog: &[BikeRecord]) -> Vec<TableSection> {
        let records: Vec<Option<Value>> = self
            .slots
            .iter()
            .map(|slot| {
                let bike = slot.as_deref().and_then(|key| find(catalog, key))?;
                match serde_json::to_value(bike) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::warn!(error = %e, key = %bike.key, "bike record is not serializable");
                        None
                    }
                }
            })
            .collect();

        CATEGORIES
            .iter()
            .map(|category| TableSection {
                title: category.title,
                rows: category
                    .rows
                    .iter()
                    .map(|row| TableRow {
                        label: row.label,
                        path: row.path,
                        cells: records
                            .iter()
                            .map(|record| match record {
                                Some(value) => format_value(lookup(value, row.path), row.format),
                                None => EMPTY_CELL.to_owned(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }
}

fn find<'a>(catalog: &'a [BikeRecord], key: &str) -> Option<&'a BikeRecord> {
    catalog.iter().find(|bike| bike.key == key)
}

/// `City Comfort Pro - CHF 2499`.
#[must_use]
pub fn option_label(bike: &BikeRecord) -> String {
    format!("{} - CHF {}", bike.name, bike.price)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BikeHeader {
    pub name: String,
    pub image: String,
    pub price: String,
    pub rating: String,
}

impl From<&BikeRecord> for BikeHeader {
    fn from(bike: &BikeRecord) -> Self {
        Self {
            name: bike.name.clone(),
            image: bike.image.clone(),
            price: format!("CHF {}", bike.price),
            rating: format!("⭐ {}/5", bike.reviews.rating),
        }
    }
}

// =============================================================================
// SPEC TABLE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueFormat {
    Text,
    Rating,
    Score,
    Boolean,
}

#[derive(Clone, Copy, Debug)]
pub struct SpecRow {
    pub label: &'static str,
    /// Dotted path into the serialized record, e.g. `battery.chargingTime`.
    pub path: &'static str,
    pub format: ValueFormat,
}

#[derive(Clone, Copy, Debug)]
pub struct SpecCategory {
    pub title: &'static str,
    pub rows: &'static [SpecRow],
}

const fn row(label: &'static str, path: &'static str, format: ValueFormat) -> SpecRow {
    SpecRow { label, path, format }
}

const fn text(label: &'static str, path: &'static str) -> SpecRow {
    row(label, path, ValueFormat::Text)
}

pub const CATEGORIES: [SpecCategory; 7] = [
    SpecCategory {
        title: "Basic Info",
        rows: &[
            text("Brand", "brand"),
            text("Category", "category"),
            text("Price (CHF)", "price"),
            row("Overall Rating", "reviews.rating", ValueFormat::Rating),
        ],
    },
    SpecCategory {
        title: "Motor & Power",
        rows: &[
            text("Motor Brand", "motor.brand"),
            text("Motor Model", "motor.model"),
            text("Max Torque (Nm)", "motor.torque"),
            text("Position", "motor.position"),
        ],
    },
    SpecCategory {
        title: "Battery & Range",
        rows: &[
            text("Battery Capacity (Wh)", "battery.capacity"),
            text("Range (km)", "battery.range"),
            text("Charging Time (h)", "battery.chargingTime"),
            row("Removable", "battery.removable", ValueFormat::Boolean),
        ],
    },
    SpecCategory {
        title: "Frame & Design",
        rows: &[
            text("Frame Material", "frame.material"),
            text("Weight (kg)", "frame.weight"),
            text("Frame Sizes", "frame.size"),
            text("Geometry", "frame.geometry"),
        ],
    },
    SpecCategory {
        title: "Components",
        rows: &[
            text("Gears", "components.gears"),
            text("Brakes", "components.brakes"),
            text("Suspension", "components.suspension"),
            text("Display", "components.display"),
        ],
    },
    SpecCategory {
        title: "Features & Extras",
        rows: &[
            text("Lights", "features.lights"),
            row("Mudguards", "features.mudguards", ValueFormat::Boolean),
            text("Rack", "features.rack"),
            row("Kickstand", "features.kickstand", ValueFormat::Boolean),
        ],
    },
    SpecCategory {
        title: "Performance Scores",
        rows: &[
            row("Comfort Score", "scores.comfort", ValueFormat::Score),
            row("Performance Score", "scores.performance", ValueFormat::Score),
            row("Value Score", "scores.valueForMoney", ValueFormat::Score),
            row("Ease of Use", "scores.easeOfUse", ValueFormat::Score),
        ],
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub label: &'static str,
    pub path: &'static str,
    pub cells: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSection {
    pub title: &'static str,
    pub rows: Vec<TableRow>,
}

/// Follow a dotted path through nested objects.
#[must_use]
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, key| current.get(key))
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string()),
        },
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Render one cell. Missing and null values show as `-`.
#[must_use]
pub fn format_value(value: Option<&Value>, format: ValueFormat) -> String {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return EMPTY_CELL.to_owned();
    };
    match format {
        ValueFormat::Boolean => match value {
            Value::Bool(true) => "Yes".to_owned(),
            Value::Bool(false) => "No".to_owned(),
            other => plain(other),
        },
        ValueFormat::Rating => format!("⭐ {}/5", plain(value)),
        ValueFormat::Score => format!("{}/10", plain(value)),
        ValueFormat::Text => plain(value),
    }
}

// =============================================================================
// ANALYSIS
// =============================================================================

/// Bike with the strictly highest `score`; ties keep the earliest.
fn leader<'a>(bikes: &[&'a BikeRecord], score: impl Fn(&BikeRecord) -> f64) -> Option<&'a BikeRecord> {
    let (first, rest) = bikes.split_first()?;
    Some(rest.iter().copied().fold(*first, |best, bike| if score(bike) > score(best) { bike } else { best }))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insight {
    pub key: String,
    pub name: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Insights {
    pub best_overall: Insight,
    pub best_value: Insight,
    pub performance_leader: Insight,
    pub comfort_champion: Insight,
}

fn insight(bike: &BikeRecord, text: String) -> Insight {
    Insight { key: bike.key.clone(), name: bike.name.clone(), text }
}

/// Analysis cards; `None` with fewer than two bikes.
#[must_use]
pub fn insights(bikes: &[&BikeRecord]) -> Option<Insights> {
    if bikes.len() < MIN_BIKES {
        return None;
    }
    let overall = leader(bikes, BikeRecord::overall_score)?;
    let value = leader(bikes, |bike| bike.scores.value_for_money)?;
    let performance = leader(bikes, |bike| bike.scores.performance)?;
    let comfort = leader(bikes, |bike| bike.scores.comfort)?;
    Some(Insights {
        best_overall: insight(
            overall,
            format!(
                "Highest combined score across all categories. {}.",
                overall.ai_insights.best_for.join(", ")
            ),
        ),
        best_value: insight(
            value,
            format!("Best value at CHF {} with {}/10 value score.", value.price, value.scores.value_for_money),
        ),
        performance_leader: insight(
            performance,
            format!(
                "Top performance with {}Nm torque and {}/10 score.",
                performance.motor.torque, performance.scores.performance
            ),
        ),
        comfort_champion: insight(
            comfort,
            format!(
                "Most comfortable ride with {}/10 comfort score. {} geometry.",
                comfort.scores.comfort, comfort.frame.geometry
            ),
        ),
    })
}

/// Usage categories checked for recommendations, in display order.
pub const USAGES: [&str; 5] = ["commuting", "touring", "family-transport", "trail-riding", "casual-riding"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageRecommendation {
    pub title: String,
    pub bike_name: String,
    pub experience: String,
}

/// `family-transport` -> `Family Transport`.
fn usage_title(usage: &str) -> String {
    usage
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// First bike suited to each usage; usages nobody covers are omitted.
#[must_use]
pub fn usage_recommendations(bikes: &[&BikeRecord]) -> Vec<UsageRecommendation> {
    USAGES
        .iter()
        .filter_map(|usage| {
            let bike = bikes.iter().find(|bike| bike.ai_insights.best_for.iter().any(|b| b == usage))?;
            Some(UsageRecommendation {
                title: usage_title(usage),
                bike_name: bike.name.clone(),
                experience: bike.ai_insights.user_experience.clone(),
            })
        })
        .collect()
}

// =============================================================================
// SHARE + EXPORT
// =============================================================================

fn require_pair(bikes: &[&BikeRecord], action: &str) -> Result<(), ToolkitError> {
    if bikes.len() < MIN_BIKES {
        return Err(ToolkitError::validation(format!("Please select at least 2 bikes to {action} comparison.")));
    }
    Ok(())
}

/// `Check out this e-bike comparison: A vs B on Godspeed!`
pub fn share_text(bikes: &[&BikeRecord]) -> Result<String, ToolkitError> {
    require_pair(bikes, "share")?;
    let names: Vec<&str> = bikes.iter().map(|bike| bike.name.as_str()).collect();
    Ok(format!("Check out this e-bike comparison: {} on Godspeed!", names.join(" vs ")))
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonExport {
    pub bikes: Vec<BikeRecord>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub source: &'static str,
}

pub fn export(bikes: &[&BikeRecord], now: OffsetDateTime) -> Result<ComparisonExport, ToolkitError> {
    require_pair(bikes, "export")?;
    Ok(ComparisonExport { bikes: bikes.iter().map(|bike| (*bike).clone()).collect(), timestamp: now, source: EXPORT_SOURCE })
}
