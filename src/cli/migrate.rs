//! `migrate` subcommand
//!
//! Moves website docs from `website/docs/r` style layout into `templates/`.
//! Flags are parsed here; the work itself is delegated to a [`WebsiteMigrator`].

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Arg, ArgMatches, ColorChoice, Command};
use tracing::{debug, instrument};

use crate::application::services::WebsiteMigrator;
use crate::cli::commands::run_reporting;
use crate::cli::error::{CliError, CliResult};
use crate::cli::help::render_flag_help;
use crate::config::MigrateSettings;
use crate::domain::MigrateConfig;
use crate::exitcode;
use crate::infrastructure::traits::Ui;

/// One-line description shown in the command list.
pub const SYNOPSIS: &str = "migrates website files from old directory structure (website/docs/r) to tfplugindocs supported structure (templates/)";

const USAGE: &str = "tfplugindocs migrate [<args>]";

const PROVIDER_DIR: &str = "provider-dir";
const OLD_WEBSITE_SOURCE_DIR: &str = "old-website-source-dir";
const NEW_WEBSITE_SOURCE_DIR: &str = "new-website-source-dir";

const HELP_FLAGS: &[&str] = &["-h", "--help", "-help"];

/// The `migrate` command: flag set, help text and delegation to the migrator.
pub struct MigrateCommand {
    ui: Arc<dyn Ui>,
    migrator: Arc<dyn WebsiteMigrator>,
    defaults: MigrateSettings,
}

impl MigrateCommand {
    pub fn new(
        ui: Arc<dyn Ui>,
        migrator: Arc<dyn WebsiteMigrator>,
        defaults: MigrateSettings,
    ) -> Self {
        Self {
            ui,
            migrator,
            defaults,
        }
    }

    pub fn synopsis(&self) -> &'static str {
        SYNOPSIS
    }

    pub fn help(&self) -> String {
        render_flag_help(USAGE, &self.flags())
    }

    /// Fresh flag set; built per call so no parse state outlives a run.
    pub fn flags(&self) -> Command {
        Command::new("migrate")
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true)
            .color(ColorChoice::Never)
            .arg(string_flag(
                PROVIDER_DIR,
                "relative or absolute path to the root provider code directory when running the command outside the root provider code directory",
                "",
            ))
            .arg(string_flag(
                OLD_WEBSITE_SOURCE_DIR,
                "old website directory based on provider-dir",
                &self.defaults.old_website_source_dir,
            ))
            .arg(string_flag(
                NEW_WEBSITE_SOURCE_DIR,
                "new website templates directory based on provider-dir",
                &self.defaults.new_website_source_dir,
            ))
    }

    /// Parse `args` into a config; omitted flags take their defaults.
    pub fn parse(&self, args: &[String]) -> CliResult<MigrateConfig> {
        let matches = self
            .flags()
            .try_get_matches_from(args.iter().map(|a| with_double_dash(a)))
            .map_err(|e| CliError::FlagParse(flag_error_message(&e)))?;

        Ok(MigrateConfig {
            provider_dir: PathBuf::from(string_value(&matches, PROVIDER_DIR)),
            old_website_source_dir: PathBuf::from(string_value(&matches, OLD_WEBSITE_SOURCE_DIR)),
            new_website_source_dir: PathBuf::from(string_value(&matches, NEW_WEBSITE_SOURCE_DIR)),
        })
    }

    /// Run with the raw arguments following `migrate`; returns the exit code.
    #[instrument(skip(self))]
    pub fn run(&self, args: &[String]) -> i32 {
        if args.iter().any(|a| HELP_FLAGS.contains(&a.as_str())) {
            self.ui.output(&self.help());
            return exitcode::OK;
        }

        let config = match self.parse(args) {
            Ok(config) => config,
            Err(e) => {
                self.ui.error(&e.to_string());
                return e.exit_code();
            }
        };
        debug!("run: config={:?}", config);

        run_reporting(self.ui.as_ref(), || self.run_internal(&config))
    }

    fn run_internal(&self, config: &MigrateConfig) -> CliResult<()> {
        self.migrator
            .migrate(self.ui.as_ref(), config)
            .map_err(CliError::Migrate)
    }
}

fn string_flag(name: &'static str, usage: &'static str, default: &str) -> Arg {
    let arg = Arg::new(name)
        .long(name)
        .value_name("ARG")
        .num_args(1)
        .help(usage);
    if default.is_empty() {
        arg
    } else {
        arg.default_value(default.to_string())
    }
}

const LONG_FLAGS: &[&str] = &[PROVIDER_DIR, OLD_WEBSITE_SOURCE_DIR, NEW_WEBSITE_SOURCE_DIR];

/// Accept the single-dash long form (`-provider-dir=x`) for the known flags.
fn with_double_dash(arg: &str) -> String {
    match arg.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => {
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if LONG_FLAGS.contains(&name) {
                format!("-{arg}")
            } else {
                arg.to_string()
            }
        }
        _ => arg.to_string(),
    }
}

fn string_value(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

/// First line of clap's rendered error, without its `error: ` prefix.
fn flag_error_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
