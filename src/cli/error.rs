//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("unable to parse flags: {0}")]
    FlagParse(String),

    #[error("unable to migrate website: {0}")]
    Migrate(#[source] ApplicationError),

    #[error("{0}")]
    Application(#[from] ApplicationError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::FlagParse(_) | CliError::Migrate(_) | CliError::Application(_) => {
                crate::exitcode::FAILURE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use std::path::PathBuf;

    #[test]
    fn given_migration_error_when_display_then_prefixed() {
        let err = CliError::Migrate(
            DomainError::LegacyDirNotFound(PathBuf::from("/p/website")).into(),
        );
        assert_eq!(
            err.to_string(),
            "unable to migrate website: legacy website directory not found: /p/website"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn given_flag_error_when_exit_code_then_one() {
        let err = CliError::FlagParse("unexpected argument '--bogus' found".into());
        assert_eq!(err.exit_code(), crate::exitcode::FAILURE);
        assert!(err.to_string().starts_with("unable to parse flags: "));
    }
}
