//! Local filesystem adapter using std::fs.

use std::io::Write as _;
use std::path::Path;

use stagehand_core::{application::ports::Filesystem, error::StagehandResult};

/// Production filesystem implementation using `std::fs`.
///
/// Writes go through a temporary file in the destination directory followed
/// by a rename, so a failed write never leaves a truncated artifact behind
/// and a re-run cleanly overwrites existing files.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> StagehandResult<String> {
        std::fs::read_to_string(path).map_err(|e| read_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> StagehandResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));

        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| write_error(path, e, "create temporary file"))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| write_error(path, e, "write content"))?;

        // Windows refuses to rename over an existing file; clear the way.
        #[cfg(windows)]
        if path.exists() {
            std::fs::remove_file(path).map_err(|e| write_error(path, e, "replace existing file"))?;
        }

        tmp.persist(path)
            .map_err(|e| write_error(path, e.error, "persist file"))?;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> StagehandResult<()> {
        std::fs::create_dir_all(path).map_err(|e| {
            stagehand_core::application::ApplicationError::DirectoryCreate {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn write_error(
    path: &Path,
    e: std::io::Error,
    operation: &str,
) -> stagehand_core::error::StagehandError {
    stagehand_core::application::ApplicationError::FileWrite {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

fn read_error(path: &Path, e: std::io::Error) -> stagehand_core::error::StagehandError {
    stagehand_core::application::ApplicationError::TemplateLoad {
        name: "template file",
        reason: format!("{}: {e}", path.display()),
    }
    .into()
}
