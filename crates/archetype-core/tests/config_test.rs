use archetype_core::config::*;

const SECRET: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

fn valid_config() -> ArchetypeConfig {
    let mut config = ArchetypeConfig::default();
    config.session.secret = SECRET.to_string();
    config
}

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = ArchetypeConfig::from_toml("").unwrap();

    // Storage defaults
    assert_eq!(config.storage.db_path, "archetype.db");
    assert_eq!(config.storage.busy_timeout_ms, 5_000);
    assert_eq!(config.storage.read_pool_size, 4);

    // Classifier defaults
    assert_eq!(config.classifier.balanced_band, 12.5);
    assert_eq!(config.classifier.secondary_closeness, 10.0);
    assert_eq!(config.classifier.exact_margin, 40.0);
    assert_eq!(config.classifier.strong_margin, 20.0);
    assert_eq!(config.classifier.moderate_margin, 8.0);

    // Session defaults
    assert!(config.session.secret.is_empty());
    assert_eq!(config.session.token_ttl_secs, 2_592_000);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[storage]
db_path = "/var/lib/quiz/results.db"

[classifier]
secondary_closeness = 6.0
"#;
    let config = ArchetypeConfig::from_toml(toml).unwrap();
    assert_eq!(config.storage.db_path, "/var/lib/quiz/results.db");
    assert_eq!(config.storage.read_pool_size, 4);
    assert_eq!(config.classifier.secondary_closeness, 6.0);
    assert_eq!(config.classifier.exact_margin, 40.0);
}

#[test]
fn config_rejects_malformed_toml() {
    let err = ArchetypeConfig::from_toml("[storage\ndb_path = 1").unwrap_err();
    assert!(matches!(
        err,
        archetype_core::errors::ConfigError::ParseError { .. }
    ));
}

#[test]
fn config_serde_roundtrip() {
    let config = valid_config();
    let toml_str = config.to_toml().unwrap();
    let roundtripped = ArchetypeConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.storage.db_path, config.storage.db_path);
    assert_eq!(roundtripped.classifier, config.classifier);
    assert_eq!(roundtripped.session.secret, SECRET);
}

#[test]
fn validate_accepts_defaults_with_secret() {
    valid_config().validate().unwrap();
}

#[test]
fn validate_requires_secret() {
    let err = ArchetypeConfig::default().validate().unwrap_err();
    assert!(err.to_string().contains("session.secret"));
}

#[test]
fn validate_rejects_short_or_non_hex_secret() {
    let mut config = valid_config();
    config.session.secret = "abc123".to_string();
    assert!(config.validate().is_err());

    config.session.secret = "z".repeat(64);
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_unordered_margins() {
    let mut config = valid_config();
    config.classifier.strong_margin = 50.0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("moderate < strong < exact"));
}

#[test]
fn validate_rejects_negative_thresholds() {
    let mut config = valid_config();
    config.classifier.secondary_closeness = -1.0;
    assert!(config.validate().is_err());

    let mut config = valid_config();
    config.classifier.balanced_band = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_zero_pool_and_ttl() {
    let mut config = valid_config();
    config.storage.read_pool_size = 0;
    assert!(config.validate().is_err());

    let mut config = valid_config();
    config.session.token_ttl_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn load_reads_file() {
    let dir = std::env::temp_dir().join(format!("archetype-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("archetype.toml");
    std::fs::write(
        &path,
        format!("[session]\nsecret = \"{SECRET}\"\ntoken_ttl_secs = 60\n"),
    )
    .unwrap();

    let config = ArchetypeConfig::load(Some(&path)).unwrap();
    assert_eq!(config.session.token_ttl_secs, 60);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn load_reports_missing_file() {
    let err = ArchetypeConfig::load(Some(std::path::Path::new("/nonexistent/archetype.toml")))
        .unwrap_err();
    assert!(matches!(
        err,
        archetype_core::errors::ConfigError::FileNotFound { .. }
    ));
}
