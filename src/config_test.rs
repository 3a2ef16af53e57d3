use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.static_dir, PathBuf::from("target/site/pkg"));
    assert_eq!(config.overrides, ConfigOverrides::default());
    assert_eq!(config.shop_root, "");
}

#[test]
fn blank_values_fall_back() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", " "), ("STATIC_DIR", "")])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.static_dir, PathBuf::from("target/site/pkg"));
}

#[test]
fn reads_port_dir_and_root() {
    let config =
        HostConfig::from_lookup(lookup(&[("PORT", "8080"), ("STATIC_DIR", "dist/pkg"), ("SHOP_ROOT", "/de-ch/")]))
            .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.static_dir, PathBuf::from("dist/pkg"));
    assert_eq!(config.shop_root, "/de-ch/");
}

#[test]
fn bad_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, HostError::InvalidPort(ref raw) if raw == "eighty"));
}

#[test]
fn overrides_file_is_parsed() {
    let path = std::env::temp_dir().join(format!("storefront-overrides-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"theme":"dawn","features":{"blogGenerator":false}}"#).unwrap();

    let config = HostConfig::from_lookup(lookup(&[("TOOLKIT_CONFIG_PATH", path.to_str().unwrap())])).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.overrides.theme.as_deref(), Some("dawn"));
    assert_eq!(config.overrides.features.and_then(|f| f.blog_generator), Some(false));
}

#[test]
fn missing_overrides_file_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("TOOLKIT_CONFIG_PATH", "/nonexistent/ebike-overrides.json")]))
        .unwrap_err();
    assert!(matches!(err, HostError::ReadConfig { .. }));
}

#[test]
fn malformed_overrides_file_is_an_error() {
    let path = std::env::temp_dir().join(format!("storefront-bad-{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").unwrap();

    let err = HostConfig::from_lookup(lookup(&[("TOOLKIT_CONFIG_PATH", path.to_str().unwrap())])).unwrap_err();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(err, HostError::ParseConfig { .. }));
}
