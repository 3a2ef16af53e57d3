use super::*;

#[test]
fn detect_godspeed_from_body_class() {
    let markers = PageMarkers::new().with_body_class("gradient");
    assert_eq!(detect(&markers), Theme::Godspeed);
}

#[test]
fn detect_godspeed_wins_over_generic_markers() {
    let markers = PageMarkers::new()
        .with_selector(".shopify-section")
        .with_selector(".header__wrapper");
    assert_eq!(detect(&markers), Theme::Godspeed);
}

#[test]
fn detect_custom_from_homepage_class_selector() {
    let markers = PageMarkers::new().with_selector("[class*=\"homepage--\"]");
    assert_eq!(detect(&markers), Theme::Custom);
}

#[test]
fn detect_impulse_requires_body_class_and_logo() {
    let logo_only = PageMarkers::new().with_selector(".site-header__logo");
    assert_eq!(detect(&logo_only), Theme::Unknown);

    let both = logo_only.with_body_class("template-index");
    assert_eq!(detect(&both), Theme::Impulse);
}

#[test]
fn detect_brooklyn_before_debut() {
    let markers = PageMarkers::new()
        .with_selector(".site-header")
        .with_selector(".main-content")
        .with_selector(".template-index");
    assert_eq!(detect(&markers), Theme::Brooklyn);

    let debut = PageMarkers::new()
        .with_selector(".site-header")
        .with_selector(".template-index");
    assert_eq!(detect(&debut), Theme::Debut);
}

#[test]
fn detect_generic_and_unknown() {
    let generic = PageMarkers::new().with_selector("[class*=\"template-\"]");
    assert_eq!(detect(&generic), Theme::GenericShopify);
    assert_eq!(detect(&PageMarkers::new()), Theme::Unknown);
}

#[test]
fn theme_name_parses_back() {
    for theme in [
        Theme::Godspeed,
        Theme::Custom,
        Theme::Impulse,
        Theme::Brooklyn,
        Theme::Debut,
        Theme::GenericShopify,
        Theme::Unknown,
    ] {
        assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
    }
    assert!("wordpress".parse::<Theme>().is_err());
}

#[test]
fn stylesheet_href_trims_trailing_slash() {
    assert_eq!(stylesheet_href("", "3.0.0"), "/assets/godspeed-bike-toolkit.css?v=3.0.0");
    assert_eq!(stylesheet_href("/de/", "3.0.0"), "/de/assets/godspeed-bike-toolkit.css?v=3.0.0");
}

#[test]
fn css_variables_include_branding_and_theme() {
    let vars = css_variables(&Branding::default(), Theme::Impulse);
    assert!(vars.contains(&("--ebike-accent".to_owned(), "#ff6b9d".to_owned())));
    assert_eq!(vars.last(), Some(&("--ebike-theme".to_owned(), "impulse".to_owned())));
    assert_eq!(vars.len(), 6);
}
