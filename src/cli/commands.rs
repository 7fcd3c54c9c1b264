//! Command dispatch and the shared failure-reporting convention

use std::io;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::migrate::MigrateCommand;
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::Ui;

/// Dispatch the parsed command line; returns the process exit code.
pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> i32 {
    match &cli.command {
        Commands::Migrate { args } => migrate_command(container).run(args),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            exitcode::OK
        }
    }
}

/// Wire the `migrate` command from the container.
pub fn migrate_command(container: &ServiceContainer) -> MigrateCommand {
    MigrateCommand::new(
        container.ui.clone(),
        Arc::new(container.migrate_service()),
        container.settings.migrate.clone(),
    )
}

/// Run `f`, reporting any error to `ui`; returns the exit code.
pub fn run_reporting<F>(ui: &dyn Ui, f: F) -> i32
where
    F: FnOnce() -> CliResult<()>,
{
    match f() {
        Ok(()) => exitcode::OK,
        Err(e) => {
            debug!("command failed: {:?}", e);
            ui.error(&format!("Error executing command: {}", e));
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::cli::error::CliError;
    use crate::util::testing::RecordingUi;

    #[test]
    fn given_success_when_run_reporting_then_ok_and_silent() {
        let ui = RecordingUi::default();

        let code = run_reporting(&ui, || Ok(()));

        assert_eq!(code, exitcode::OK);
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn given_error_when_run_reporting_then_reports_and_fails() {
        let ui = RecordingUi::default();

        let code = run_reporting(&ui, || {
            Err(CliError::Application(ApplicationError::Config {
                message: "bad".into(),
            }))
        });

        assert_eq!(code, exitcode::FAILURE);
        assert_eq!(
            ui.errors(),
            vec!["Error executing command: config error: bad".to_string()]
        );
    }
}
