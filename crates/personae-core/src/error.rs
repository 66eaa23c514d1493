//! Unified error handling for personae-core.
//!
//! Wraps domain errors with a root type the CLI can categorise and attach
//! suggestions to.

use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for personae-core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PersonaeError {
    /// Errors from the domain layer (lookup and dispatch failures).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PersonaeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in personae".into()],
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
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type PersonaeResult<T> = Result<T, PersonaeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityKind;

    #[test]
    fn domain_errors_display_transparently() {
        let err: PersonaeError = DomainError::UnknownVariant {
            variant: "robot".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Unknown entity variant 'robot'");
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn construction_errors_are_validation_category() {
        let err = PersonaeError::from(DomainError::MissingIdentifier {
            kind: EntityKind::Organization,
        });
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
