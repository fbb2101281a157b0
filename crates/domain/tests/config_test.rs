use blockdecree_domain::config::{ConfigError, LogFormat, NormalizationConfig};
use blockdecree_domain::{CliOverrides, Config};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.normalization.max_domain_length, 255);
    assert_eq!(config.normalization.max_source_bytes, 10_000_000);
    assert!(config.normalization.source_domain.is_none());
    assert!(config.normalization.extra_tlds.is_empty());
    assert!(config
        .normalization
        .service_subdomains
        .contains(&"www".to_string()));
    assert!(config.classification.unblock_precedence);
    assert_eq!(config.storage.seed_files, vec!["blocked.txt".to_string()]);
    assert_eq!(config.storage.output_file, "blocked.result.txt");
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_toml_uses_defaults() {
    let config = Config::from_toml(
        r#"
        [normalization]
        source_domain = "webportal.nrada.gov.ua"

        [storage]
        output_file = "out.txt"
        "#,
    )
    .unwrap();

    assert_eq!(
        config.normalization.source_domain.as_deref(),
        Some("webportal.nrada.gov.ua")
    );
    assert_eq!(config.normalization.max_domain_length, 255);
    assert_eq!(config.storage.output_file, "out.txt");
    assert_eq!(config.storage.manifest, "documents.toml");
    assert_eq!(config.classification.block_keywords.len(), 2);
}

#[test]
fn test_config_parse_error() {
    let err = Config::from_toml("[normalization\nmax_domain_length = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_config_cli_overrides_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

    let config = Config::load(
        Some(path.to_str().unwrap()),
        CliOverrides {
            output_file: Some("custom.txt".to_string()),
            seed_files: Some(vec!["a.txt".to_string(), "b.txt".to_string()]),
            log_level: Some("debug".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(config.storage.output_file, "custom.txt");
    assert_eq!(config.storage.seed_files.len(), 2);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_load_missing_file_fails() {
    let err = Config::load(Some("/nonexistent/blockdecree.toml"), CliOverrides::default())
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileRead(_, _)));
}

#[test]
fn test_config_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");
    let mut config = Config::default();
    config.normalization.extra_tlds = vec!["test".to_string()];
    config.save(path.to_str().unwrap()).unwrap();

    let reloaded = Config::load(Some(path.to_str().unwrap()), CliOverrides::default()).unwrap();
    assert_eq!(reloaded.normalization.extra_tlds, vec!["test".to_string()]);
}

#[test]
fn test_validate_rejects_bad_service_label() {
    let mut config = Config::default();
    config.normalization.service_subdomains.push("w w".to_string());
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_validate_rejects_zero_limits() {
    let mut config = Config::default();
    config.normalization.max_source_bytes = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.normalization.max_domain_length = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_empty_keywords() {
    let mut config = Config::default();
    config.classification.block_keywords.clear();
    config.classification.unblock_keywords.clear();
    assert!(config.validate().is_err());
}

#[test]
fn test_normalized_service_subdomains() {
    let norm = NormalizationConfig {
        service_subdomains: vec![
            " WWW ".to_string(),
            "m".to_string(),
            "".to_string(),
            "bad label".to_string(),
        ],
        ..Default::default()
    };
    assert_eq!(
        norm.normalized_service_subdomains(),
        vec!["www".to_string(), "m".to_string()]
    );
}

#[test]
fn test_config_error_converts_to_domain_error() {
    let err: blockdecree_domain::DomainError =
        ConfigError::Validation("output_file cannot be empty".to_string()).into();
    assert_eq!(
        err.to_string(),
        "Configuration error: Invalid configuration: output_file cannot be empty"
    );
}

#[test]
fn test_logging_section() {
    let config = Config::from_toml("[logging]\nformat = \"json\"\n").unwrap();
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
    assert_eq!(Config::default().logging.format, LogFormat::Text);
}
