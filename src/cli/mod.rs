//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod help;
pub mod migrate;

pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};
pub use migrate::MigrateCommand;
