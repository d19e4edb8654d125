use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Required option missing: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid service name '{name}'")]
    InvalidName { name: String },

    // ========================================================================
    // Structural Errors
    // ========================================================================
    #[error("Malformed document: expected a {expected}")]
    MalformedDocument { expected: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingField { field } => vec![
                format!("Provide the --{} option", field),
                "Or run in an interactive terminal to be prompted".into(),
            ],
            Self::InvalidName { name } => vec![
                format!("'{}' is not a valid service name", name),
                "Use letters, digits and hyphens, starting with a letter".into(),
                "At least two characters; underscores are not allowed".into(),
                "Examples: new-service, api2, billing-worker".into(),
            ],
            Self::MalformedDocument { expected } => vec![
                format!("The template must be a top-level {}", expected),
                "Check your custom template files for structural edits".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingField { .. } | Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::MalformedDocument { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
