//! Legacy docs → templates layout mapping
//!
//! Paths are relative to the legacy docs root (`website/docs`):
//! - `r/` and `resources/` become `resources/`
//! - `d/` and `data-sources/` become `data-sources/`
//! - `ephemeral-resources/`, `functions/` and `guides/` keep their names
//! - files directly in the docs root land in the templates root
//!
//! Document file names lose every extension and gain `.md.tmpl`.

use std::path::{Component, Path, PathBuf};

/// Suffix of every generated template file.
pub const TEMPLATE_SUFFIX: &str = ".md.tmpl";

const DOC_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Top-level section of the templates directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocSection {
    Resources,
    DataSources,
    EphemeralResources,
    Functions,
    Guides,
    /// Any other subdirectory, carried over under its own name
    Other(String),
}

impl DocSection {
    /// Classify a legacy subdirectory name.
    pub fn from_legacy(dir: &str) -> Self {
        match dir {
            "r" | "resources" => Self::Resources,
            "d" | "data-sources" => Self::DataSources,
            "ephemeral-resources" => Self::EphemeralResources,
            "functions" => Self::Functions,
            "guides" => Self::Guides,
            other => Self::Other(other.to_string()),
        }
    }

    /// Directory name under the templates root.
    pub fn dir_name(&self) -> &str {
        match self {
            Self::Resources => "resources",
            Self::DataSources => "data-sources",
            Self::EphemeralResources => "ephemeral-resources",
            Self::Functions => "functions",
            Self::Guides => "guides",
            Self::Other(name) => name,
        }
    }
}

/// Template file name for a legacy document name, or `None` for non-documents.
///
/// `instance.html.markdown` → `instance.md.tmpl`
pub fn template_file_name(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if !DOC_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
        return None;
    }
    let stem = file_name.split('.').next().unwrap_or_default();
    if stem.is_empty() {
        return None;
    }
    Some(format!("{stem}{TEMPLATE_SUFFIX}"))
}

/// Template path (relative to the templates root) for a document path
/// relative to the legacy docs root.
///
/// Returns `None` when the path is not a document or is not a plain relative path.
pub fn template_path(rel: &Path) -> Option<PathBuf> {
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::CurDir => {}
            _ => return None,
        }
    }

    let (file_name, dirs) = parts.split_last()?;
    let template = template_file_name(file_name)?;

    let mut target = PathBuf::new();
    if let Some((section, rest)) = dirs.split_first() {
        target.push(DocSection::from_legacy(section).dir_name());
        target.extend(rest);
    }
    target.push(template);
    Some(target)
}
