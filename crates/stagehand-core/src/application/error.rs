//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template could not be read or parsed.
    #[error("Failed to load template '{name}': {reason}")]
    TemplateLoad { name: &'static str, reason: String },

    /// Target directory creation failed.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreate { path: PathBuf, reason: String },

    /// Writing a scaffold artifact failed.
    #[error("Failed to write {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateLoad { name, reason } => vec![
                format!("Template '{}' could not be loaded: {}", name, reason),
                "If you configured a custom template directory, check its contents".into(),
                "Unset templates.local_path to fall back to the built-in templates".into(),
            ],
            Self::DirectoryCreate { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::FileWrite { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Earlier artifacts are left in place; re-run after fixing the cause".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateLoad { .. } => ErrorCategory::NotFound,
            Self::DirectoryCreate { .. } | Self::FileWrite { .. } => ErrorCategory::Internal,
        }
    }
}
