// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::EntityKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (outcomes carry them across batch runs)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// A failed validation rule is *not* an error: it is a message inside a
/// [`ValidationReport`](crate::domain::ValidationReport).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Construction Errors
    // ========================================================================
    #[error("Entity name must not be empty")]
    EmptyName,

    #[error("An identifier is required for '{kind}' entities")]
    MissingIdentifier { kind: EntityKind },

    // ========================================================================
    // Registry Errors
    // ========================================================================
    #[error("Unknown entity variant '{variant}'")]
    UnknownVariant { variant: String },

    #[error("A validator is already registered for '{kind}'")]
    DuplicateValidator { kind: EntityKind },

    // ========================================================================
    // Dispatch Errors
    // ========================================================================
    #[error("{validator} validates '{expected}' entities, got '{found}'")]
    VariantMismatch {
        validator: &'static str,
        expected: EntityKind,
        found: EntityKind,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec![
                "Give the entity a non-blank name".into(),
                "Example: personae validate --kind person --name \"Maria\"".into(),
            ],
            Self::MissingIdentifier { kind } => vec![
                format!("'{}' entities carry an identifier", kind),
                format!("Expected format: {}", kind.identifier_format().unwrap_or("-")),
            ],
            Self::UnknownVariant { variant } => {
                let mut suggestions = vec![
                    format!("'{}' is not a known entity variant", variant),
                    "Known variants:".into(),
                ];
                for kind in EntityKind::ALL {
                    suggestions.push(format!("  • {}", kind));
                }
                suggestions.push("Try: personae kinds".into());
                suggestions
            }
            Self::DuplicateValidator { kind } => vec![
                format!("Register exactly one validator for '{}'", kind),
            ],
            Self::VariantMismatch { .. } => vec![
                "Resolve the validator through the registry for the entity's own kind".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName | Self::MissingIdentifier { .. } => ErrorCategory::Validation,
            Self::UnknownVariant { .. } => ErrorCategory::NotFound,
            Self::DuplicateValidator { .. } | Self::VariantMismatch { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
