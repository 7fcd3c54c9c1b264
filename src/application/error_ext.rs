//! Path context for I/O failures
//!
//! Every filesystem call in the services goes through one of these so the
//! user sees which file a failure concerns.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.read_to_string(&doc)
    ///     .with_path_context("read document", &doc)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;

    /// Add source and destination context to an I/O error.
    fn with_paths_context(self, action: &str, from: &Path, to: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{} {}", action, path.display()),
            source: Box::new(e),
        })
    }

    fn with_paths_context(self, action: &str, from: &Path, to: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{} {} to {}", action, from.display(), to.display()),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_adding_path_context_then_message_names_path() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));

        let err = result
            .with_path_context("read", Path::new("website/docs/index.md"))
            .unwrap_err();

        assert_eq!(err.to_string(), "read website/docs/index.md: gone");
    }

    #[test]
    fn given_io_error_when_adding_paths_context_then_message_names_both() {
        let result: io::Result<u64> = Err(io::Error::new(io::ErrorKind::Other, "full"));

        let err = result
            .with_paths_context("copy", Path::new("a.md"), Path::new("a.md.tmpl"))
            .unwrap_err();

        assert_eq!(err.to_string(), "copy a.md to a.md.tmpl: full");
    }
}
