//! Frame size calculator.
//!
//! Each bike type has a chart of height thresholds in ascending order. The
//! recommended size is the first bucket whose threshold is at least the rider's
//! height; riders taller than every threshold get the largest bucket.

#[cfg(test)]
#[path = "sizing_test.rs"]
mod sizing_test;

use std::fmt;

use crate::error::ToolkitError;
use crate::input;

pub const MIN_HEIGHT_CM: i64 = 120;
pub const MAX_HEIGHT_CM: i64 = 230;

const MISSING_MEASUREMENTS: &str = "Please enter both height and inseam measurements.";
const HEIGHT_OUT_OF_RANGE: &str = "Please enter a height between 120 and 230 cm.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BikeType {
    #[default]
    City,
    Mountain,
    Cargo,
}

impl BikeType {
    pub const ALL: [Self; 3] = [Self::City, Self::Mountain, Self::Cargo];

    /// Unknown values fall back to the city chart.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "mountain" => Self::Mountain,
            "cargo" => Self::Cargo,
            _ => Self::City,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Mountain => "mountain",
            Self::Cargo => "cargo",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::City => "City & Trekking",
            Self::Mountain => "Mountain",
            Self::Cargo => "Cargo",
        }
    }

    #[must_use]
    pub fn chart(self) -> &'static [SizeBucket] {
        match self {
            Self::City => &CITY_CHART,
            Self::Mountain => &MOUNTAIN_CHART,
            Self::Cargo => &CARGO_CHART,
        }
    }
}

impl fmt::Display for BikeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Riders up to `max_height_cm` fit `size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeBucket {
    pub max_height_cm: i64,
    pub size: &'static str,
}

const fn bucket(max_height_cm: i64, size: &'static str) -> SizeBucket {
    SizeBucket { max_height_cm, size }
}

const CITY_CHART: [SizeBucket; 6] = [
    bucket(150, "XS (44-46 cm)"),
    bucket(160, "XS (44-46 cm)"),
    bucket(170, "S (48-50 cm)"),
    bucket(180, "M (52-54 cm)"),
    bucket(190, "L (56-58 cm)"),
    bucket(200, "XL (60-62 cm)"),
];

const MOUNTAIN_CHART: [SizeBucket; 6] = [
    bucket(150, "XS (38-40 cm)"),
    bucket(160, "XS (38-40 cm)"),
    bucket(170, "S (42-44 cm)"),
    bucket(180, "M (46-48 cm)"),
    bucket(190, "L (50-52 cm)"),
    bucket(200, "XL (54-56 cm)"),
];

const CARGO_CHART: [SizeBucket; 4] = [
    bucket(150, "S (46-48 cm)"),
    bucket(165, "S (46-48 cm)"),
    bucket(180, "M (50-52 cm)"),
    bucket(200, "L (54-56 cm)"),
];

/// Frame size for a rider of `height_cm` on `bike_type`.
#[must_use]
pub fn frame_size(height_cm: i64, bike_type: BikeType) -> &'static str {
    let chart = bike_type.chart();
    chart
        .iter()
        .find(|bucket| height_cm <= bucket.max_height_cm)
        .or_else(|| chart.iter().max_by_key(|bucket| bucket.max_height_cm))
        .map_or("", |bucket| bucket.size)
}

/// Fit advice from the inseam to height ratio.
#[must_use]
pub fn advice(height_cm: i64, inseam_cm: i64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let ratio = inseam_cm as f64 / height_cm as f64;
    let mut text = String::from("This recommendation is a guideline. ");
    if ratio < 0.43 {
        text.push_str("You have relatively short legs; consider a smaller frame for comfort. ");
    } else if ratio > 0.47 {
        text.push_str("You have relatively long legs; a larger frame may be suitable. ");
    }
    text.push_str("For the best fit, we recommend a test ride and professional consultation.");
    text
}

/// Raw form values of one size calculator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SizingForm {
    pub height: String,
    pub inseam: String,
    pub bike_type: BikeType,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeRecommendation {
    pub frame_size: String,
    pub advice: String,
}

impl SizingForm {
    /// Validate the form and compute the recommendation.
    pub fn recommend(&self) -> Result<SizeRecommendation, ToolkitError> {
        let height = input::parse_int(&self.height).filter(|h| *h != 0);
        let inseam = input::parse_int(&self.inseam).filter(|i| *i != 0);
        let (Some(height), Some(inseam)) = (height, inseam) else {
            return Err(ToolkitError::validation(MISSING_MEASUREMENTS));
        };
        if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height) {
            return Err(ToolkitError::validation(HEIGHT_OUT_OF_RANGE));
        }
        Ok(SizeRecommendation {
            frame_size: frame_size(height, self.bike_type).to_owned(),
            advice: advice(height, inseam),
        })
    }
}
