//! Unified error handling for Stagehand Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stagehand Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// stagehand-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum StagehandError {
    /// Errors from the domain layer (business logic violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StagehandError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Stagehand".into(),
                "Please report this issue at: https://github.com/cosecruz/stagehand/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is recoverable by re-prompting the user.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Domain(DomainError::MissingField { .. })
                | Self::Domain(DomainError::InvalidName { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StagehandResult<T> = Result<T, StagehandError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> StagehandResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> StagehandResult<T> {
        self.map_err(|e| StagehandError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
