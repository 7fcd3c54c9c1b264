//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! and commands to be tested with mock implementations.

use std::io;
use std::path::{Path, PathBuf};

use colored::Colorize;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Current working directory of the process.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Canonicalize path (resolve symlinks, make absolute).
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copy file from source to destination.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Remove a directory and all its contents.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

/// User-facing output sink.
///
/// `output` and `info` go to stdout, `warn` and `error` to stderr.
pub trait Ui: Send + Sync {
    /// Plain output, e.g. help text or a summary.
    fn output(&self, msg: &str);

    /// Progress information.
    fn info(&self, msg: &str);

    /// Non-fatal problem.
    fn warn(&self, msg: &str);

    /// Failure message.
    fn error(&self, msg: &str);
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        std::fs::copy(from, to)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }
}

/// Terminal UI with colors.
///
/// Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.
#[derive(Debug, Default)]
pub struct TerminalUi;

impl Ui for TerminalUi {
    fn output(&self, msg: &str) {
        println!("{}", msg);
    }

    fn info(&self, msg: &str) {
        println!("{}", msg.green());
    }

    fn warn(&self, msg: &str) {
        eprintln!("{}", msg.yellow());
    }

    fn error(&self, msg: &str) {
        eprintln!("{}", msg.red());
    }
}
