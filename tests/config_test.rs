//! Integration tests for Settings loading.
//!
//! These tests use explicit config files in temp directories, never the
//! user's global config.

use std::fs;

use tempfile::TempDir;

use tfplugindocs::application::ApplicationError;
use tfplugindocs::config::{MigrateSettings, Settings};

#[test]
fn given_no_config_file_when_load_then_defaults() {
    // Act
    let settings = Settings::load_from(None).expect("load settings");

    // Assert
    assert_eq!(settings.migrate, MigrateSettings::default());
}

#[test]
fn given_missing_config_file_when_load_then_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tfplugindocs.toml");

    // Act
    let settings = Settings::load_from(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.migrate.old_website_source_dir, "website");
    assert_eq!(settings.migrate.new_website_source_dir, "templates");
}

#[test]
fn given_config_file_when_load_then_overrides_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tfplugindocs.toml");
    fs::write(
        &path,
        r#"
[migrate]
old_website_source_dir = "site"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(Some(&path)).expect("load settings");

    // Assert: only the specified key changes
    assert_eq!(settings.migrate.old_website_source_dir, "site");
    assert_eq!(settings.migrate.new_website_source_dir, "templates");
}

#[test]
fn given_malformed_config_file_when_load_then_config_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tfplugindocs.toml");
    fs::write(&path, "[migrate\nold_website_source_dir = ").unwrap();

    // Act
    let result = Settings::load_from(Some(&path));

    // Assert
    match result {
        Err(ApplicationError::Config { message }) => assert!(!message.is_empty()),
        other => panic!("expected config error, got {other:?}"),
    }
}
