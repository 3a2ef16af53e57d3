use super::*;

fn wishlist_instance(id: &str) -> ToolInstance {
    ToolInstance {
        id: id.to_owned(),
        kind: ToolKind::Wishlist,
        settings: InstanceSettings::default(),
        state: ToolState::Wishlist,
    }
}

#[test]
fn tool_names_parse_back_to_kinds() {
    for kind in ToolKind::ALL {
        assert_eq!(kind.tool_name().parse::<ToolKind>().unwrap(), kind);
    }
}

#[test]
fn unknown_tool_name_is_an_error() {
    let err = "chatbot".parse::<ToolKind>().unwrap_err();
    assert!(matches!(err, ToolkitError::UnknownTool(ref name) if name == "chatbot"));
}

#[test]
fn calculators_share_the_calculator_id_attribute() {
    assert_eq!(ToolKind::Sizing.id_attribute(), "data-calculator-id");
    assert_eq!(ToolKind::Financing.id_attribute(), "data-calculator-id");
    assert_eq!(ToolKind::RangeCalculator.id_attribute(), "data-calculator-id");
    assert_eq!(ToolKind::ServiceBooking.id_attribute(), "data-service-id");
    assert_eq!(ToolKind::RangeCalculator.id_prefix(), "range_calc");
}

#[test]
fn bind_is_idempotent_per_id() {
    let mut module = ToolModule::new(ToolKind::Wishlist);
    assert!(module.bind(wishlist_instance("wishlist_1")));
    assert!(!module.bind(wishlist_instance("wishlist_1")));
    assert_eq!(module.len(), 1);
}

#[test]
fn unbind_and_destroy_release_instances() {
    let mut module = ToolModule::new(ToolKind::Wishlist);
    module.bind(wishlist_instance("a"));
    module.bind(wishlist_instance("b"));

    assert_eq!(module.unbind("a").map(|i| i.id), Some("a".to_owned()));
    assert!(module.unbind("a").is_none());

    assert_eq!(module.destroy(), vec!["b".to_owned()]);
    assert!(module.is_empty());
}

#[test]
fn state_reports_its_kind() {
    assert_eq!(ToolState::Wishlist.kind(), ToolKind::Wishlist);
}
