//! Integration tests for application options loading.

use std::fs;

use rejig_config::{AppOptions, ConfigError, SourceType};
use tempfile::tempdir;

#[test]
fn test_load_local_template() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("sample.yml");
    fs::write(
        &config_path,
        r#"
templates:
  - type: local
    source: /path/to/template
    alias: test1
"#,
    )
    .unwrap();

    let options = AppOptions::load(&config_path).unwrap();

    assert_eq!(options.templates.len(), 1);
    assert_eq!(options.templates[0].name, "test1");
    assert_eq!(options.templates[0].source, "/path/to/template");
    assert_eq!(options.templates[0].source_type, SourceType::Local);
}

#[test]
fn test_load_git_template() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("sample.yml");
    fs::write(
        &config_path,
        r#"
templates:
  - type: git
    source: https://some/url
    alias: test1
"#,
    )
    .unwrap();

    let options = AppOptions::load(&config_path).unwrap();

    assert_eq!(options.templates.len(), 1);
    assert_eq!(options.templates[0].source_type, SourceType::Git);
}

#[test]
fn test_load_unsupported_template_type() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("sample.yml");
    fs::write(
        &config_path,
        r#"
templates:
  - type: other
    source: https://some/url
    alias: test1
"#,
    )
    .unwrap();

    let err = AppOptions::load(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("template 0 type is undefined"));
}

#[test]
fn test_load_missing_template_type() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("sample.yml");
    fs::write(
        &config_path,
        r#"
templates:
  - source: /some/path2
    alias: test2
"#,
    )
    .unwrap();

    assert!(AppOptions::load(&config_path).is_err());
}

#[test]
fn test_load_missing_file() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("does-not-exist.yml");

    let err = AppOptions::load(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_inventories_and_templates() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("sample.yml");
    fs::write(
        &config_path,
        r#"
templates:
  - type: local
    source: ./demo
    alias: demo
inventories:
  - namespace: acme
    source: https://example.com/inventory.git
    type: git
  - namespace: local-pool
    source: /srv/templates
    type: local
"#,
    )
    .unwrap();

    let options = AppOptions::load(&config_path).unwrap();

    assert_eq!(options.templates.len(), 1);
    assert_eq!(options.inventories.len(), 2);
    assert!(options.find_inventory("acme").is_some());
    assert!(options.find_inventory("local-pool").is_some());
    assert!(options.find_inventory("unknown").is_none());
}
