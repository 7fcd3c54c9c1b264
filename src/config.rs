//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/tfplugindocs/tfplugindocs.toml`
//! 3. Environment variables: `TFPLUGINDOCS__*` prefix, `__` separated
//!
//! Settings only provide defaults; command-line flags always win.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{DEFAULT_NEW_WEBSITE_SOURCE_DIR, DEFAULT_OLD_WEBSITE_SOURCE_DIR};

const ENV_PREFIX: &str = "TFPLUGINDOCS";

/// Defaults for the `migrate` command flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MigrateSettings {
    /// Default for `--old-website-source-dir`
    pub old_website_source_dir: String,
    /// Default for `--new-website-source-dir`
    pub new_website_source_dir: String,
}

impl Default for MigrateSettings {
    fn default() -> Self {
        Self {
            old_website_source_dir: DEFAULT_OLD_WEBSITE_SOURCE_DIR.into(),
            new_website_source_dir: DEFAULT_NEW_WEBSITE_SOURCE_DIR.into(),
        }
    }
}

/// Unified configuration for tfplugindocs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// `migrate` command defaults
    pub migrate: MigrateSettings,
}

/// Get the XDG config directory for tfplugindocs.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tfplugindocs").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("tfplugindocs.toml"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings from defaults, the global config file and the environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit config file (missing files are ignored).
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default(
                "migrate.old_website_source_dir",
                defaults.migrate.old_website_source_dir,
            )
            .map_err(config_err)?
            .set_default(
                "migrate.new_website_source_dir",
                defaults.migrate.new_website_source_dir,
            )
            .map_err(config_err)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_then_migrate_dirs_match_legacy_layout() {
        let settings = Settings::default();
        assert_eq!(settings.migrate.old_website_source_dir, "website");
        assert_eq!(settings.migrate.new_website_source_dir, "templates");
    }

    #[test]
    fn given_global_config_path_then_ends_with_toml_file() {
        if let Some(path) = global_config_path() {
            assert!(path.ends_with("tfplugindocs/tfplugindocs.toml"));
        }
    }
}
