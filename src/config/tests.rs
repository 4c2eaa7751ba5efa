//! Configuration tests
//!
//! Guard the TOML template against drift: every field written by `to_toml`
//! must parse back into the same values.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).unwrap_or_else(|e| panic!("TOML:\n{}\nError: {}", toml_str, e))
}

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let resolved = Config::resolve(parse(&config.to_toml()), no_env);

    assert_eq!(resolved.api_url, config.api_url);
    assert_eq!(resolved.placeholder_image, config.placeholder_image);
    assert_eq!(resolved.currency_symbol, config.currency_symbol);
    assert_eq!(resolved.theme, config.theme);
    assert_eq!(resolved.logging.level, config.logging.level);
    assert_eq!(resolved.logging.file_rotation, config.logging.file_rotation);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.api_url = "http://localhost:3000".to_string();
    config.currency_symbol = "€".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Never;
    config.logging.file_dir = PathBuf::from("/tmp/catalog logs");

    let resolved = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(resolved.api_url, "http://localhost:3000");
    assert_eq!(resolved.currency_symbol, "€");
    assert!(resolved.logging.file_enabled);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Never);
    assert_eq!(resolved.logging.file_dir, PathBuf::from("/tmp/catalog logs"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let resolved = Config::resolve(parse(""), no_env);
    assert_eq!(resolved.api_url, "https://fakestoreapi.com");
    assert_eq!(resolved.placeholder_image, "https://picsum.photos/200");
    assert_eq!(resolved.currency_symbol, "$");
    assert_eq!(resolved.logging.file_prefix, "catalog-admin");
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
api_url = "http://from-file"
theme = "light"
"#,
    );
    let env: HashMap<&str, &str> = [("CATALOG_API_URL", "http://from-env")].into();

    let resolved = Config::resolve(file, |key| env.get(key).map(|v| v.to_string()));
    assert_eq!(resolved.api_url, "http://from-env");
    assert_eq!(resolved.theme, "light");
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
}
