use super::*;

fn form(height: &str, inseam: &str, bike_type: BikeType) -> SizingForm {
    SizingForm { height: height.to_owned(), inseam: inseam.to_owned(), bike_type }
}

#[test]
fn frame_size_picks_smallest_bucket_at_or_above_height() {
    assert_eq!(frame_size(120, BikeType::City), "XS (44-46 cm)");
    assert_eq!(frame_size(170, BikeType::City), "S (48-50 cm)");
    assert_eq!(frame_size(171, BikeType::City), "M (52-54 cm)");
    assert_eq!(frame_size(181, BikeType::Mountain), "L (50-52 cm)");
    assert_eq!(frame_size(166, BikeType::Cargo), "M (50-52 cm)");
}

#[test]
fn frame_size_above_chart_uses_largest_bucket() {
    assert_eq!(frame_size(215, BikeType::City), "XL (60-62 cm)");
    assert_eq!(frame_size(230, BikeType::Cargo), "L (54-56 cm)");
}

#[test]
fn frame_size_is_monotonic_over_valid_heights() {
    for bike_type in BikeType::ALL {
        let chart = bike_type.chart();
        let position = |h| chart.iter().position(|b| b.size == frame_size(h, bike_type)).unwrap();
        for h in MIN_HEIGHT_CM..MAX_HEIGHT_CM {
            assert!(position(h) <= position(h + 1), "{bike_type} at {h}");
        }
    }
}

#[test]
fn unknown_bike_type_uses_city_chart() {
    assert_eq!(BikeType::parse("gravel"), BikeType::City);
    assert_eq!(BikeType::parse("cargo"), BikeType::Cargo);
}

#[test]
fn missing_measurements_are_rejected() {
    let err = form("", "80", BikeType::City).recommend().unwrap_err();
    assert_eq!(err.to_string(), "Please enter both height and inseam measurements.");

    let err = form("175", "0", BikeType::City).recommend().unwrap_err();
    assert_eq!(err.to_string(), "Please enter both height and inseam measurements.");
}

#[test]
fn height_out_of_range_is_rejected() {
    let err = form("119", "80", BikeType::City).recommend().unwrap_err();
    assert_eq!(err.to_string(), "Please enter a height between 120 and 230 cm.");
    assert!(err.is_user_facing());
    assert!(form("231", "80", BikeType::City).recommend().is_err());
}

#[test]
fn recommendation_includes_size_and_advice() {
    let result = form("178", "82", BikeType::Mountain).recommend().unwrap();
    assert_eq!(result.frame_size, "M (46-48 cm)");
    assert!(result.advice.starts_with("This recommendation is a guideline. For the best fit"));
}

#[test]
fn advice_reflects_leg_ratio() {
    assert!(advice(180, 75).contains("short legs"));
    assert!(advice(180, 90).contains("long legs"));
    let neutral = advice(180, 81);
    assert!(!neutral.contains("legs"));
    assert!(neutral.ends_with("test ride and professional consultation."));
}
