//! Website migration service
//!
//! Moves legacy documentation (`website/docs/r/*.html.markdown`, ...) into the
//! templates layout (`templates/resources/*.md.tmpl`, ...). Document bodies are
//! copied unchanged; only locations and names change.
//!
//! The whole plan is validated before the first file is written, so a
//! rejected migration leaves the provider tree untouched.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{template_path, DomainError, MigrateConfig, MigrationPlan, PlannedTemplate};
use crate::infrastructure::traits::{FileSystem, Ui};

/// Legacy docs live in this subdirectory of the website directory when present.
const LEGACY_DOCS_SUBDIR: &str = "docs";

/// The operation the `migrate` command delegates to.
pub trait WebsiteMigrator: Send + Sync {
    /// Migrate the website described by `config`, reporting progress to `ui`.
    fn migrate(&self, ui: &dyn Ui, config: &MigrateConfig) -> ApplicationResult<()>;
}

/// Filesystem-backed website migration.
pub struct MigrateService {
    fs: Arc<dyn FileSystem>,
}

impl MigrateService {
    /// Create a new migration service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Resolve the provider directory: empty means cwd, anything else is canonicalized.
    pub fn resolve_provider_dir(&self, provider_dir: &Path) -> ApplicationResult<PathBuf> {
        let requested = if provider_dir.as_os_str().is_empty() {
            self.fs
                .current_dir()
                .with_path_context("resolve current directory", Path::new("."))?
        } else {
            provider_dir.to_path_buf()
        };
        let resolved = self
            .fs
            .canonicalize(&requested)
            .with_path_context("resolve provider directory", &requested)?;

        if !self.fs.is_dir(&resolved) {
            return Err(DomainError::NotADirectory(resolved).into());
        }
        Ok(resolved)
    }

    /// Resolve a directory that may not exist yet: the deepest existing
    /// ancestor is canonicalized and the remaining components are appended.
    fn resolve_missing_dir(&self, path: &Path) -> ApplicationResult<PathBuf> {
        let normalized = normalize_lexically(path);
        let mut existing = normalized.as_path();
        let mut missing = Vec::new();
        while !self.fs.exists(existing) {
            match (existing.parent(), existing.file_name()) {
                (Some(parent), Some(name)) => {
                    missing.push(name.to_os_string());
                    existing = parent;
                }
                _ => return Ok(normalized),
            }
        }

        let mut resolved = self
            .fs
            .canonicalize(existing)
            .with_path_context("resolve directory", existing)?;
        resolved.extend(missing.iter().rev());
        Ok(resolved)
    }

    /// Compute the migration without touching the filesystem.
    #[instrument(skip(self))]
    pub fn plan(&self, config: &MigrateConfig) -> ApplicationResult<MigrationPlan> {
        let provider_dir = self.resolve_provider_dir(&config.provider_dir)?;
        let legacy_dir = provider_dir.join(&config.old_website_source_dir);
        if !self.fs.is_dir(&legacy_dir) {
            return Err(DomainError::LegacyDirNotFound(legacy_dir).into());
        }

        // Containment checks below only hold on resolved paths.
        let legacy_dir = self
            .fs
            .canonicalize(&legacy_dir)
            .with_path_context("resolve legacy website directory", &legacy_dir)?;
        let templates_dir =
            self.resolve_missing_dir(&provider_dir.join(&config.new_website_source_dir))?;

        if provider_dir.starts_with(&legacy_dir) {
            return Err(DomainError::LegacyContainsProvider(legacy_dir).into());
        }
        if templates_dir.starts_with(&legacy_dir) {
            return Err(DomainError::TemplatesInsideLegacy {
                templates: templates_dir,
                legacy: legacy_dir,
            }
            .into());
        }

        let nested_docs = legacy_dir.join(LEGACY_DOCS_SUBDIR);
        let docs_dir = if self.fs.is_dir(&nested_docs) {
            nested_docs
        } else {
            legacy_dir.clone()
        };
        debug!(
            "plan: docs_dir={}, templates_dir={}",
            docs_dir.display(),
            templates_dir.display()
        );

        let mut templates = Vec::new();
        let mut skipped = Vec::new();
        let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

        // Walk the whole legacy dir: everything in it is removed afterwards,
        // so files outside the docs root must at least be reported.
        for entry in WalkDir::new(&legacy_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::OperationFailed {
                context: format!("scan {}", legacy_dir.display()),
                source: Box::new(e),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let source = entry.path().to_path_buf();
            let target_rel = source.strip_prefix(&docs_dir).ok().and_then(template_path);
            let Some(target_rel) = target_rel else {
                debug!("plan: skipping non-document {}", source.display());
                skipped.push(source);
                continue;
            };
            let target = templates_dir.join(target_rel);

            if let Some(first) = claimed.get(&target) {
                return Err(DomainError::DuplicateTemplate {
                    target,
                    first: first.clone(),
                    second: source,
                }
                .into());
            }
            if self.fs.exists(&target) {
                return Err(DomainError::TemplateExists(target).into());
            }

            claimed.insert(target.clone(), source.clone());
            templates.push(PlannedTemplate { source, target });
        }

        if templates.is_empty() {
            return Err(DomainError::NoDocuments(docs_dir).into());
        }
        debug!(
            "plan: {} templates, {} skipped",
            templates.len(),
            skipped.len()
        );

        Ok(MigrationPlan {
            provider_dir,
            legacy_dir,
            docs_dir,
            templates_dir,
            templates,
            skipped,
        })
    }

    /// Execute a plan: write templates, then remove the legacy directory.
    pub fn apply(&self, ui: &dyn Ui, plan: &MigrationPlan) -> ApplicationResult<()> {
        for skipped in &plan.skipped {
            ui.warn(&format!(
                "skipping non-document file: {}",
                plan.display_path(skipped).display()
            ));
        }

        for template in &plan.templates {
            self.fs
                .ensure_parent(&template.target)
                .with_path_context("create directory for", &template.target)?;
            self.fs
                .copy(&template.source, &template.target)
                .with_paths_context("copy", &template.source, &template.target)?;
            ui.info(&format!(
                "migrated {} to {}",
                plan.display_path(&template.source).display(),
                plan.display_path(&template.target).display()
            ));
        }

        self.fs
            .remove_dir_all(&plan.legacy_dir)
            .with_path_context("remove legacy website directory", &plan.legacy_dir)?;
        debug!("apply: removed {}", plan.legacy_dir.display());

        ui.output(&format!(
            "Migrated {} files from {} to {}",
            plan.templates.len(),
            plan.display_path(&plan.legacy_dir).display(),
            plan.display_path(&plan.templates_dir).display()
        ));
        Ok(())
    }
}

/// Drop `.` and fold `..` into its parent without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

impl WebsiteMigrator for MigrateService {
    #[instrument(skip(self, ui))]
    fn migrate(&self, ui: &dyn Ui, config: &MigrateConfig) -> ApplicationResult<()> {
        let plan = self.plan(config)?;
        ui.info(&format!(
            "migrating website from {} to {}",
            plan.display_path(&plan.docs_dir).display(),
            plan.display_path(&plan.templates_dir).display()
        ));
        self.apply(ui, &plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_dots_when_normalize_lexically_then_folded() {
        assert_eq!(
            normalize_lexically(Path::new("/work/p/website/../templates/./x")),
            PathBuf::from("/work/p/templates/x")
        );
        assert_eq!(
            normalize_lexically(Path::new("/work/p/a/../..")),
            PathBuf::from("/work")
        );
    }
}
