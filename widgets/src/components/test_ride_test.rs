use time::macros::date;

use super::*;

#[test]
fn time_grid_explains_missing_slots() {
    assert_eq!(slots_message(&Slots::NoDate), Some("Please select a date first."));
    assert_eq!(slots_message(&Slots::Loading(date!(2025 - 03 - 06))), Some("Loading available times..."));
    assert_eq!(slots_message(&Slots::Ready(Vec::new())), Some(NO_SLOTS_MESSAGE));
    assert_eq!(slots_message(&Slots::Ready(vec!["09:00".to_owned()])), None);
}

#[test]
fn selected_slot_is_highlighted() {
    assert_eq!(slot_class(true), "ebike-slot ebike-slot--selected");
    assert_eq!(slot_class(false), "ebike-slot");
}
