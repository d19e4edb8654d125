//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stagehand-adapters` crate provides implementations.

use crate::error::StagehandResult;
use std::path::Path;

/// Port for the ambient CLI session.
///
/// Implemented by:
/// - `stagehand_adapters::console::TermConsole` (production)
/// - `stagehand_adapters::console::MemoryConsole` (testing)
///
/// ## Design Notes
///
/// - `greeting` and `log` are infallible from the core's point of view; a
///   broken terminal is the collaborator's concern.
#[cfg_attr(test, mockall::automock)]
pub trait Console: Send + Sync {
    /// Whether the session is attached to an interactive terminal.
    fn is_interactive(&self) -> bool;

    /// Display the one-time greeting banner.
    fn greeting(&self);

    /// Emit one user-facing line.
    fn log(&self, message: &str);
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stagehand_adapters::filesystem::LocalFilesystem` (production)
/// - `stagehand_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Implementations map I/O failures to the error variant matching the
///   operation (`DirectoryCreate` vs `FileWrite`).
/// - `write_file` must be atomic from the caller's perspective: a failed
///   write never leaves a truncated file behind.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> StagehandResult<String>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> StagehandResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StagehandResult<()>;
}

/// Port for template retrieval.
///
/// Returns the raw text of the two fixed templates; parsing happens in the
/// application layer so every source is held to the same structural checks.
///
/// Implemented by:
/// - `stagehand_adapters::templates::BuiltinTemplates` (embedded assets)
/// - `stagehand_adapters::templates::DirTemplates` (user template directory)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Raw text of the service manifest template (YAML).
    fn manifest_template(&self) -> StagehandResult<String>;

    /// Raw text of the package descriptor template (JSON).
    fn package_template(&self) -> StagehandResult<String>;
}
