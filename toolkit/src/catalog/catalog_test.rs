use super::*;

#[test]
fn demo_catalog_has_four_bikes_in_display_order() {
    let keys: Vec<String> = DemoData.bikes().into_iter().map(|bike| bike.key).collect();
    assert_eq!(keys, vec!["city-comfort", "trekking-sport", "mountain-trail", "cargo-family"]);
}

#[test]
fn demo_range_specs_match_bike_batteries() {
    let specs = DemoData.range_specs();
    let trekking = specs.iter().find(|spec| spec.key == "trekking-sport").unwrap();
    assert!((trekking.battery_capacity - 625.0).abs() < f64::EPSILON);
    assert!((trekking.base_consumption - 14.0).abs() < f64::EPSILON);
}

#[test]
fn overall_score_is_mean_of_three_scores() {
    let bike = DemoData.bikes().remove(0);
    let expected = (9.2 + 7.1 + 8.9) / 3.0;
    assert!((bike.overall_score() - expected).abs() < 1e-9);
}

#[test]
fn service_locations_filter_by_package() {
    let locations = DemoData.service_locations();
    let express: Vec<&str> = locations
        .iter()
        .filter(|location| location.offers("express"))
        .map(|location| location.key.as_str())
        .collect();
    assert_eq!(express, vec!["zurich", "basel"]);
}

#[test]
fn bike_record_serializes_with_camel_case_paths() {
    let value = serde_json::to_value(DemoData.bikes().remove(0)).unwrap();
    assert_eq!(value.pointer("/scores/valueForMoney"), Some(&serde_json::json!(8.9)));
    assert_eq!(value.pointer("/battery/chargingTime"), Some(&serde_json::json!(4.5)));
}

#[test]
fn host_section_overrides_demo_data() {
    let data = HostData::new().with_section(
        "testRideLocations",
        r#"[{"key":"luzern","name":"Luzern","address":"Pilatusstrasse 1"}]"#,
    );
    let locations = data.test_ride_locations();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].key, "luzern");
    assert_eq!(locations[0].phone, None);
    assert_eq!(data.service_packages(), DemoData.service_packages());
}

#[test]
fn malformed_or_empty_section_falls_back_to_demo() {
    let data = HostData::from_sections([("vendors", "{broken"), ("bikes", "[]"), ("weather", "[]")]);
    assert_eq!(data.vendors(), DemoData.vendors());
    assert_eq!(data.bikes(), DemoData.bikes());
}
