//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::MigrateService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem, TerminalUi, Ui};

/// Container holding shared dependencies of the commands.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// User-facing output
    pub ui: Arc<dyn Ui>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem), Arc::new(TerminalUi))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>, ui: Arc<dyn Ui>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs, ui }
    }

    /// Website migration backed by the container's filesystem.
    pub fn migrate_service(&self) -> MigrateService {
        MigrateService::new(self.fs.clone())
    }
}
