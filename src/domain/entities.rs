//! Domain entities: core data structures

use std::path::{Path, PathBuf};

/// Default legacy documentation directory, relative to the provider directory.
pub const DEFAULT_OLD_WEBSITE_SOURCE_DIR: &str = "website";

/// Default templates directory, relative to the provider directory.
pub const DEFAULT_NEW_WEBSITE_SOURCE_DIR: &str = "templates";

/// Resolved `migrate` options for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateConfig {
    /// Root of the provider source tree; empty means the current directory
    pub provider_dir: PathBuf,
    /// Legacy documentation tree, relative to `provider_dir`
    pub old_website_source_dir: PathBuf,
    /// Target templates tree, relative to `provider_dir`
    pub new_website_source_dir: PathBuf,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            provider_dir: PathBuf::new(),
            old_website_source_dir: PathBuf::from(DEFAULT_OLD_WEBSITE_SOURCE_DIR),
            new_website_source_dir: PathBuf::from(DEFAULT_NEW_WEBSITE_SOURCE_DIR),
        }
    }
}

impl MigrateConfig {
    /// True when no provider directory was given and the cwd should be used.
    pub fn uses_current_dir(&self) -> bool {
        self.provider_dir.as_os_str().is_empty()
    }
}

/// One legacy document and the template it becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTemplate {
    /// Absolute path of the legacy document
    pub source: PathBuf,
    /// Absolute path of the template to write
    pub target: PathBuf,
}

/// Everything a migration will do, computed before any file is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationPlan {
    /// Resolved provider directory
    pub provider_dir: PathBuf,
    /// `<provider_dir>/<old_website_source_dir>`, removed after migration
    pub legacy_dir: PathBuf,
    /// Directory the layout mapping is relative to (`<legacy_dir>/docs` or `legacy_dir`)
    pub docs_dir: PathBuf,
    /// `<provider_dir>/<new_website_source_dir>`
    pub templates_dir: PathBuf,
    /// Documents to migrate, in walk order
    pub templates: Vec<PlannedTemplate>,
    /// Files under `docs_dir` that are not documents
    pub skipped: Vec<PathBuf>,
}

impl MigrationPlan {
    /// Path relative to the provider directory, for display.
    pub fn display_path<'a>(&self, path: &'a Path) -> std::borrow::Cow<'a, Path> {
        match pathdiff::diff_paths(path, &self.provider_dir) {
            Some(rel) if !rel.starts_with("..") => std::borrow::Cow::Owned(rel),
            _ => std::borrow::Cow::Borrowed(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_config_when_checking_then_uses_current_dir() {
        let config = MigrateConfig::default();
        assert!(config.uses_current_dir());
        assert_eq!(config.old_website_source_dir, PathBuf::from("website"));
        assert_eq!(config.new_website_source_dir, PathBuf::from("templates"));
    }

    #[test]
    fn given_plan_when_display_path_then_relative_to_provider() {
        let plan = MigrationPlan {
            provider_dir: PathBuf::from("/work/provider"),
            legacy_dir: PathBuf::from("/work/provider/website"),
            docs_dir: PathBuf::from("/work/provider/website/docs"),
            templates_dir: PathBuf::from("/work/provider/templates"),
            templates: vec![],
            skipped: vec![],
        };

        let shown = plan.display_path(Path::new("/work/provider/templates/index.md.tmpl"));
        assert_eq!(shown.as_ref(), Path::new("templates/index.md.tmpl"));

        let outside = plan.display_path(Path::new("/elsewhere/file.md"));
        assert_eq!(outside.as_ref(), Path::new("/elsewhere/file.md"));
    }
}
