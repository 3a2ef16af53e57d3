//! Range estimator.
//!
//! DESIGN
//! ======
//! Consumption (Wh/km) is the bike's base consumption scaled by independent
//! multipliers for assist level, terrain, weather, temperature, total weight
//! and speed. Range is battery capacity over consumption, reported as three
//! estimates at 80%, 100% and 120% of that figure.
//!
//! Imperial forms are converted to metric before any multiplier is looked up,
//! and the rounded kilometre estimates are converted back for display.

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;

use crate::catalog::RangeSpec;
use crate::error::ToolkitError;
use crate::input;

const KM_TO_MILES: f64 = 0.621_371;
const LBS_TO_KG: f64 = 0.453_592;
const MPH_TO_KMH: f64 = 1.609_34;

/// Speed at which the speed multiplier is neutral.
const REFERENCE_SPEED_KMH: f64 = 25.0;

pub const DEFAULT_BIKE: &str = "trekking-sport";

// =============================================================================
// UNITS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// `"imperial"` selects imperial; anything else is metric.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("imperial") { Self::Imperial } else { Self::Metric }
    }

    #[must_use]
    pub fn distance_label(self) -> &'static str {
        match self {
            Self::Metric => "km",
            Self::Imperial => "miles",
        }
    }

    #[must_use]
    pub fn weight_label(self) -> &'static str {
        match self {
            Self::Metric => "kg",
            Self::Imperial => "lbs",
        }
    }

    #[must_use]
    pub fn temperature_label(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    #[must_use]
    pub fn speed_label(self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        }
    }

    /// Input bounds and default value for one numeric field.
    #[must_use]
    pub fn field(self, field: RangeField) -> FieldBounds {
        let (min, max, default) = match (self, field) {
            (Self::Metric, RangeField::RiderWeight) => (40, 150, 75),
            (Self::Imperial, RangeField::RiderWeight) => (90, 330, 165),
            (Self::Metric, RangeField::CargoWeight) => (0, 50, 0),
            (Self::Imperial, RangeField::CargoWeight) => (0, 110, 0),
            (Self::Metric, RangeField::Temperature) => (-10, 40, 20),
            (Self::Imperial, RangeField::Temperature) => (14, 104, 68),
            (Self::Metric, RangeField::Speed) => (10, 45, 25),
            (Self::Imperial, RangeField::Speed) => (6, 28, 15),
        };
        FieldBounds { min, max, default }
    }

    fn tire_pressure_tip(self) -> &'static str {
        match self {
            Self::Metric => "Maintain proper tire pressure (2.5-4 bar)",
            Self::Imperial => "Maintain proper tire pressure (35-60 psi)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeField {
    RiderWeight,
    CargoWeight,
    Temperature,
    Speed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldBounds {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

// =============================================================================
// MULTIPLIER TABLES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssistLevel {
    Eco,
    #[default]
    Tour,
    Sport,
    Turbo,
}

impl AssistLevel {
    pub const ALL: [Self; 4] = [Self::Eco, Self::Tour, Self::Sport, Self::Turbo];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == raw)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eco => "eco",
            Self::Tour => "tour",
            Self::Sport => "sport",
            Self::Turbo => "turbo",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Eco => "ECO - Maximum Range",
            Self::Tour => "TOUR - Balanced",
            Self::Sport => "SPORT - Performance",
            Self::Turbo => "TURBO - Maximum Power",
        }
    }

    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Eco => 0.7,
            Self::Tour => 1.0,
            Self::Sport => 1.4,
            Self::Turbo => 1.8,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Terrain {
    Flat,
    #[default]
    Rolling,
    Hilly,
    Mountain,
}

impl Terrain {
    pub const ALL: [Self; 4] = [Self::Flat, Self::Rolling, Self::Hilly, Self::Mountain];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|terrain| terrain.as_str() == raw)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Rolling => "rolling",
            Self::Hilly => "hilly",
            Self::Mountain => "mountain",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Flat => "Flat/City (0% grade)",
            Self::Rolling => "Rolling Hills (2-5% grade)",
            Self::Hilly => "Hilly (5-10% grade)",
            Self::Mountain => "Mountain (10%+ grade)",
        }
    }

    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Flat => 1.0,
            Self::Rolling => 1.2,
            Self::Hilly => 1.5,
            Self::Mountain => 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Weather {
    #[default]
    Ideal,
    Good,
    Fair,
    Poor,
}

impl Weather {
    pub const ALL: [Self; 4] = [Self::Ideal, Self::Good, Self::Fair, Self::Poor];

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|weather| weather.as_str() == raw)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ideal => "ideal",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ideal => "Ideal (20°C, No Wind)",
            Self::Good => "Good (Light Wind)",
            Self::Fair => "Fair (Strong Wind/Cold)",
            Self::Poor => "Poor (Very Cold/Storm)",
        }
    }

    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Ideal => 1.0,
            Self::Good => 1.1,
            Self::Fair => 1.3,
            Self::Poor => 1.6,
        }
    }
}

#[must_use]
pub fn temperature_multiplier(celsius: f64) -> f64 {
    if celsius < 5.0 {
        1.4
    } else if celsius < 15.0 {
        1.2
    } else if celsius > 30.0 {
        1.15
    } else {
        1.0
    }
}

/// Multiplier for rider plus cargo weight in kg.
#[must_use]
pub fn weight_multiplier(total_kg: f64) -> f64 {
    if total_kg > 100.0 {
        1.35
    } else if total_kg > 80.0 {
        1.15
    } else if total_kg < 60.0 {
        0.9
    } else {
        1.0
    }
}

#[must_use]
pub fn speed_multiplier(speed_kmh: f64) -> f64 {
    (speed_kmh / REFERENCE_SPEED_KMH).clamp(0.8, 1.5)
}

/// `+20% consumption`, `0% consumption`, `-30% consumption`.
#[must_use]
pub fn format_impact(multiplier: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let percent = ((multiplier - 1.0) * 100.0).round() as i64;
    if percent > 0 { format!("+{percent}% consumption") } else { format!("{percent}% consumption") }
}

/// Optimization tips shown under the results.
#[must_use]
pub fn tips(units: Units) -> [&'static str; 6] {
    [
        "Use ECO mode for maximum range",
        units.tire_pressure_tip(),
        "Plan routes to avoid headwinds",
        "Keep battery between 20-80% charge",
        "Lighter cargo extends range significantly",
        "Smooth acceleration saves energy",
    ]
}

// =============================================================================
// FORM + ESTIMATE
// =============================================================================

/// Raw form values of one range calculator, in the form's units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeForm {
    pub units: Units,
    pub bike: String,
    pub assist: AssistLevel,
    pub rider_weight: String,
    pub cargo_weight: String,
    pub terrain: Terrain,
    pub weather: Weather,
    pub temperature: String,
    pub speed: String,
}

impl Default for RangeForm {
    fn default() -> Self {
        Self::for_units(Units::Metric)
    }
}

impl RangeForm {
    /// Form pre-filled with the unit system's default values.
    #[must_use]
    pub fn for_units(units: Units) -> Self {
        let default = |field| units.field(field).default.to_string();
        Self {
            units,
            bike: DEFAULT_BIKE.to_owned(),
            assist: AssistLevel::default(),
            rider_weight: default(RangeField::RiderWeight),
            cargo_weight: default(RangeField::CargoWeight),
            terrain: Terrain::default(),
            weather: Weather::default(),
            temperature: default(RangeField::Temperature),
            speed: default(RangeField::Speed),
        }
    }

    fn number(&self, raw: &str, field: RangeField) -> f64 {
        input::parse_number(raw).unwrap_or_else(|| f64::from(self.units.field(field).default))
    }

    fn total_weight_kg(&self) -> f64 {
        let total = self.number(&self.rider_weight, RangeField::RiderWeight)
            + self.number(&self.cargo_weight, RangeField::CargoWeight);
        match self.units {
            Units::Metric => total,
            Units::Imperial => total * LBS_TO_KG,
        }
    }

    fn temperature_celsius(&self) -> f64 {
        let value = self.number(&self.temperature, RangeField::Temperature);
        match self.units {
            Units::Metric => value,
            Units::Imperial => (value - 32.0) * 5.0 / 9.0,
        }
    }

    fn speed_kmh(&self) -> f64 {
        let value = self.number(&self.speed, RangeField::Speed);
        match self.units {
            Units::Metric => value,
            Units::Imperial => value * MPH_TO_KMH,
        }
    }
}

/// Individual consumption multipliers for one form state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Multipliers {
    pub assist: f64,
    pub terrain: f64,
    pub weather: f64,
    pub temperature: f64,
    pub weight: f64,
    pub speed: f64,
}

impl Multipliers {
    #[must_use]
    pub fn product(&self) -> f64 {
        self.assist * self.terrain * self.weather * self.temperature * self.weight * self.speed
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RangeEstimate {
    pub units: Units,
    /// Capacity over consumption, in km.
    pub base_range_km: f64,
    pub consumption: f64,
    pub multipliers: Multipliers,
}

impl RangeEstimate {
    #[must_use]
    pub fn conservative_km(&self) -> f64 {
        self.base_range_km * 0.8
    }

    #[must_use]
    pub fn realistic_km(&self) -> f64 {
        self.base_range_km
    }

    #[must_use]
    pub fn optimistic_km(&self) -> f64 {
        self.base_range_km * 1.2
    }

    /// Rounded kilometres, converted and rounded again for imperial display.
    #[allow(clippy::cast_possible_truncation)]
    fn display_value(&self, km: f64) -> i64 {
        let rounded = km.round();
        match self.units {
            Units::Metric => rounded as i64,
            Units::Imperial => (rounded * KM_TO_MILES).round() as i64,
        }
    }

    /// `[conservative, realistic, optimistic]` in display units.
    #[must_use]
    pub fn values(&self) -> [i64; 3] {
        [
            self.display_value(self.conservative_km()),
            self.display_value(self.realistic_km()),
            self.display_value(self.optimistic_km()),
        ]
    }

    /// `["30 km", "37 km", "45 km"]`.
    #[must_use]
    pub fn display(&self) -> [String; 3] {
        let unit = self.units.distance_label();
        self.values().map(|value| format!("{value} {unit}"))
    }

    /// Labelled impact factors: terrain, weather, weight, assist level.
    #[must_use]
    pub fn factors(&self) -> [(&'static str, String); 4] {
        [
            ("Terrain", format_impact(self.multipliers.terrain)),
            ("Weather", format_impact(self.multipliers.weather)),
            ("Weight", format_impact(self.multipliers.weight)),
            ("Assist Level", format_impact(self.multipliers.assist)),
        ]
    }
}

/// Estimate the range for `form` using the spec of the selected bike.
pub fn estimate(form: &RangeForm, specs: &[RangeSpec]) -> Result<RangeEstimate, ToolkitError> {
    let Some(spec) = specs.iter().find(|spec| spec.key == form.bike) else {
        return Err(ToolkitError::validation("Please select a bike model."));
    };
    let multipliers = Multipliers {
        assist: form.assist.multiplier(),
        terrain: form.terrain.multiplier(),
        weather: form.weather.multiplier(),
        temperature: temperature_multiplier(form.temperature_celsius()),
        weight: weight_multiplier(form.total_weight_kg()),
        speed: speed_multiplier(form.speed_kmh()),
    };
    let consumption = spec.base_consumption * multipliers.product();
    if consumption <= 0.0 {
        return Err(ToolkitError::validation("Please select a bike model."));
    }
    Ok(RangeEstimate { units: form.units, base_range_km: spec.battery_capacity / consumption, consumption, multipliers })
}
