//! Test support: logging setup and recording doubles for the I/O seams

use std::sync::{Mutex, Once};

use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::services::WebsiteMigrator;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::MigrateConfig;
use crate::infrastructure::traits::Ui;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Channel a [`RecordingUi`] message was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLevel {
    Output,
    Info,
    Warn,
    Error,
}

/// [`Ui`] that keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingUi {
    messages: Mutex<Vec<(UiLevel, String)>>,
}

impl RecordingUi {
    fn push(&self, level: UiLevel, msg: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((level, msg.to_string()));
    }

    /// Messages written at `level`, in order.
    pub fn messages(&self, level: UiLevel) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn outputs(&self) -> Vec<String> {
        self.messages(UiLevel::Output)
    }

    pub fn infos(&self) -> Vec<String> {
        self.messages(UiLevel::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(UiLevel::Warn)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(UiLevel::Error)
    }
}

impl Ui for RecordingUi {
    fn output(&self, msg: &str) {
        self.push(UiLevel::Output, msg);
    }

    fn info(&self, msg: &str) {
        self.push(UiLevel::Info, msg);
    }

    fn warn(&self, msg: &str) {
        self.push(UiLevel::Warn, msg);
    }

    fn error(&self, msg: &str) {
        self.push(UiLevel::Error, msg);
    }
}

/// [`WebsiteMigrator`] stub that records the configs it receives.
#[derive(Debug, Default)]
pub struct RecordingMigrator {
    failure: Option<String>,
    calls: Mutex<Vec<MigrateConfig>>,
}

impl RecordingMigrator {
    /// Stub whose migrations always succeed.
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Stub whose migrations always fail with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            calls: Mutex::default(),
        }
    }

    /// Configs passed to `migrate`, in call order.
    pub fn calls(&self) -> Vec<MigrateConfig> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl WebsiteMigrator for RecordingMigrator {
    fn migrate(&self, _ui: &dyn Ui, config: &MigrateConfig) -> ApplicationResult<()> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(config.clone());
        match &self.failure {
            Some(message) => Err(ApplicationError::OperationFailed {
                context: "migrate".to_string(),
                source: message.clone().into(),
            }),
            None => Ok(()),
        }
    }
}
