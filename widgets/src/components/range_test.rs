use toolkit::catalog::{DataProvider, DemoData};

use super::*;

#[test]
fn bike_options_show_capacity() {
    let specs = DemoData.range_specs();
    let trekking = specs.iter().find(|spec| spec.key == "trekking-sport").unwrap();
    assert_eq!(bike_option_label(trekking), "Trekking Sport X1 (625Wh)");
}

#[test]
fn field_labels_carry_the_unit() {
    assert_eq!(field_label("Rider Weight", Units::Imperial.weight_label()), "Rider Weight (lbs)");
    assert_eq!(field_label("Average Speed", Units::Metric.speed_label()), "Average Speed (km/h)");
}
