use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

#[test]
fn generated_id_has_prefix_millis_and_base36_suffix() {
    let mut rng = StdRng::seed_from_u64(7);
    let id = generate_instance_id("range_calc", 1_700_000_000_123, &mut rng);

    let suffix = id.strip_prefix("range_calc_1700000000123_").unwrap();
    assert_eq!(suffix.len(), 9);
    assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn generated_ids_differ_between_draws() {
    let mut rng = StdRng::seed_from_u64(1);
    let a = generate_instance_id("wishlist", 5, &mut rng);
    let b = generate_instance_id("wishlist", 5, &mut rng);
    assert_ne!(a, b);
}

#[test]
fn existing_id_uses_tool_specific_attribute() {
    let mount = Mount::new("testRideBooking").with_attribute("data-booking-id", "tr-home");
    assert_eq!(mount.existing_id(ToolKind::TestRideBooking), Some("tr-home"));
    assert_eq!(mount.existing_id(ToolKind::ServiceBooking), None);

    let blank = Mount::new("sizing").with_attribute("data-calculator-id", "  ");
    assert_eq!(blank.existing_id(ToolKind::Sizing), None);
}

#[test]
fn settings_default_when_attributes_absent() {
    let settings = InstanceSettings::from_mount(&Mount::new("rangeCalculator"));
    assert_eq!(settings, InstanceSettings::default());
    assert_eq!(settings.title_for(ToolKind::RangeCalculator), "Range Calculator");
}

#[test]
fn settings_read_data_attributes() {
    let mount = Mount::new("comparison")
        .with_attribute("data-title", "Pick two")
        .with_attribute("data-max-bikes", "3")
        .with_attribute("data-units", "imperial")
        .with_attribute("data-show-tips", "false");
    let settings = InstanceSettings::from_mount(&mount);

    assert_eq!(settings.title_for(ToolKind::Comparison), "Pick two");
    assert_eq!(settings.max_bikes, 3);
    assert_eq!(settings.units, Units::Imperial);
    assert!(!settings.show_tips);
    assert_eq!(
        settings.subtitle_for(ToolKind::Comparison),
        "Compare up to 3 bikes with detailed analysis"
    );
}

#[test]
fn invalid_max_bikes_falls_back_to_default() {
    let mount = Mount::new("comparison").with_attribute("data-max-bikes", "zero");
    assert_eq!(InstanceSettings::from_mount(&mount).max_bikes, DEFAULT_MAX_BIKES);
}

#[test]
fn oversized_max_bikes_is_clamped() {
    let mount = Mount::new("comparison").with_attribute("data-max-bikes", "4000000000");
    let settings = InstanceSettings::from_mount(&mount);
    assert_eq!(settings.max_bikes, MAX_BIKES_LIMIT);
    assert_eq!(settings.subtitle_for(ToolKind::Comparison), "Compare up to 8 bikes with detailed analysis");
}
