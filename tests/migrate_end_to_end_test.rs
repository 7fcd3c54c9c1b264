//! End-to-end: `migrate` command wired through the service container
//! with the real filesystem and a recording UI.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use tfplugindocs::cli::commands::migrate_command;
use tfplugindocs::config::Settings;
use tfplugindocs::infrastructure::di::ServiceContainer;
use tfplugindocs::infrastructure::traits::RealFileSystem;
use tfplugindocs::util::testing::{init_test_setup, RecordingUi};

fn container(ui: Arc<RecordingUi>) -> ServiceContainer {
    init_test_setup();
    ServiceContainer::with_deps(Settings::default(), Arc::new(RealFileSystem), ui)
}

#[test]
fn given_legacy_provider_when_run_then_migrates_and_exits_zero() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let provider = temp.path().join("provider");
    fs::create_dir_all(provider.join("website/docs/r")).unwrap();
    fs::write(provider.join("website/docs/r/thing.html.markdown"), "# thing\n").unwrap();
    let ui = Arc::new(RecordingUi::default());
    let cmd = migrate_command(&container(ui.clone()));

    // Act
    let code = cmd.run(&[
        "--provider-dir".to_string(),
        provider.to_string_lossy().into_owned(),
    ]);

    // Assert
    assert_eq!(code, 0);
    assert!(ui.errors().is_empty());
    assert_eq!(
        fs::read_to_string(provider.join("templates/resources/thing.md.tmpl")).unwrap(),
        "# thing\n"
    );
    assert!(!provider.join("website").exists());
}

#[test]
fn given_provider_without_website_when_run_then_reports_and_exits_one() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let ui = Arc::new(RecordingUi::default());
    let cmd = migrate_command(&container(ui.clone()));

    // Act
    let code = cmd.run(&[
        "--provider-dir".to_string(),
        temp.path().to_string_lossy().into_owned(),
    ]);

    // Assert
    assert_eq!(code, 1);
    let errors = ui.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Error executing command: unable to migrate website: "));
    assert!(errors[0].contains("legacy website directory not found"));
}
