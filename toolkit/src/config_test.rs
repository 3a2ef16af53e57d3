use super::*;

#[test]
fn theme_setting_parses_auto_and_names() {
    assert_eq!(ThemeSetting::parse("auto-detect"), ThemeSetting::AutoDetect);
    assert_eq!(ThemeSetting::parse(""), ThemeSetting::AutoDetect);
    assert_eq!(ThemeSetting::parse("impulse"), ThemeSetting::Fixed(Theme::Impulse));
    assert_eq!(ThemeSetting::parse("dawn"), ThemeSetting::AutoDetect);
}

#[test]
fn theme_adaptation_overrides_host_selectors() {
    let overrides = ConfigOverrides::from_json(r#"{"selectors":{"button":".my-button","notification":".toast"}}"#).unwrap();
    let config = ToolkitConfig::resolve(&overrides, Theme::Godspeed);
    assert_eq!(config.selectors.button, ".button");
    assert_eq!(config.selectors.notification, ".toast");
    assert_eq!(config.classes.button_primary, "button button--primary");
}

#[test]
fn unknown_theme_uses_generic_shopify_adaptation() {
    let unknown = ToolkitConfig::resolve(&ConfigOverrides::default(), Theme::Unknown);
    let generic = ToolkitConfig::resolve(&ConfigOverrides::default(), Theme::GenericShopify);
    assert_eq!(unknown, generic);
    assert_eq!(unknown.selectors.select, "select");
    assert_eq!(unknown.selectors.modal, Selectors::default().modal);
}

#[test]
fn map_classes_translates_known_tokens_only() {
    let config = ToolkitConfig::resolve(&ConfigOverrides::default(), Theme::Impulse);
    assert_eq!(
        config.map_classes("buttonPrimary  grid custom-token"),
        "btn product-form__cart-submit grid grid--uniform custom-token"
    );
    assert_eq!(config.map_classes(""), "");
}

#[test]
fn feature_overrides_disable_modules() {
    let overrides = ConfigOverrides::from_json(r#"{"features":{"blogGenerator":false},"unknownKey":1}"#).unwrap();
    let config = ToolkitConfig::resolve(&overrides, Theme::Unknown);
    assert!(!config.features.is_enabled(ToolKind::BlogGenerator));
    assert!(config.features.is_enabled(ToolKind::Comparison));
}

#[test]
fn feature_flags_set_round_trips_every_kind() {
    let mut flags = FeatureFlags::default();
    for kind in ToolKind::ALL {
        flags.set(kind, false);
        assert!(!flags.is_enabled(kind), "{kind}");
    }
}

#[test]
fn merged_overrides_prefer_newer_fields() {
    let older = ConfigOverrides::from_json(
        r##"{"theme":"debut","branding":{"primary":"#111111","accent":"#222222"},"features":{"sizing":false}}"##,
    )
    .unwrap();
    let newer = ConfigOverrides::from_json(r##"{"branding":{"accent":"#333333"},"features":{"financing":false}}"##).unwrap();

    let merged = older.merged(&newer);
    assert_eq!(merged.theme.as_deref(), Some("debut"));
    let branding = merged.branding.unwrap();
    assert_eq!(branding.primary.as_deref(), Some("#111111"));
    assert_eq!(branding.accent.as_deref(), Some("#333333"));
    let features = merged.features.unwrap();
    assert_eq!(features.sizing, Some(false));
    assert_eq!(features.financing, Some(false));
}

#[test]
fn endpoints_default_to_demo_data() {
    let config = ToolkitConfig::resolve(&ConfigOverrides::default(), Theme::Unknown);
    assert_eq!(config.endpoints, Endpoints::default());
    assert_eq!(config.css_framework, "auto");

    let overrides = ConfigOverrides::from_json(r#"{"endpoints":{"financing":"/api/finance"}}"#).unwrap();
    let config = ToolkitConfig::resolve(&overrides, Theme::Unknown);
    assert_eq!(config.endpoints.financing.as_deref(), Some("/api/finance"));
}

#[test]
fn config_serializes_camel_case_without_theme() {
    let value = serde_json::to_value(ToolkitConfig::default()).unwrap();
    assert!(value.get("theme").is_none());
    assert_eq!(value.pointer("/features/rangeCalculator"), Some(&serde_json::json!(true)));
    assert_eq!(value.pointer("/classes/buttonPrimary"), Some(&serde_json::json!("btn btn-primary")));
}
