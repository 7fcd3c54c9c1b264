//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Ui)
//! and are exposed to the CLI through narrow traits where it needs a seam.

mod migrate;

pub use migrate::{MigrateService, WebsiteMigrator};
