//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors represent violations of the documentation layout rules.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("expected {0:?} to be a directory")]
    NotADirectory(PathBuf),

    #[error("legacy website directory not found: {0}")]
    LegacyDirNotFound(PathBuf),

    #[error("legacy website directory must be below the provider directory: {0}")]
    LegacyContainsProvider(PathBuf),

    #[error("templates directory {templates} is inside legacy directory {legacy}")]
    TemplatesInsideLegacy { templates: PathBuf, legacy: PathBuf },

    #[error("no documentation files found in: {0}")]
    NoDocuments(PathBuf),

    #[error("template already exists: {0}")]
    TemplateExists(PathBuf),

    #[error("{first} and {second} both migrate to {target}")]
    DuplicateTemplate {
        target: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },
}
