use toolkit::catalog::{DataProvider, DemoData};

use super::*;

#[test]
fn insight_cards_keep_display_order() {
    let catalog = DemoData.bikes();
    let mut selection = ComparisonSelection::new(4);
    selection.select(0, "city-comfort");
    selection.select(2, "cargo-family");

    let insights = comparison::insights(&selection.active_bikes(&catalog)).unwrap();
    let cards = insight_cards(insights);
    let titles: Vec<&str> = cards.iter().map(|(title, _, _)| *title).collect();
    assert_eq!(titles, ["Best Overall", "Best Value", "Performance Leader", "Comfort Champion"]);
    assert!(cards.iter().all(|(_, _, insight)| ["city-comfort", "cargo-family"].contains(&insight.key.as_str())));
    assert_eq!(cards[3].1, "comfort");
}
