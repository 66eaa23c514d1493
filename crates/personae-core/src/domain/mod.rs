// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for personae.
//!
//! This module contains the entity model, the validation rules, and the
//! registry that pairs them.
//!
//! ## Rules of the layer
//!
//! - **No I/O**: No console, filesystem, or network calls
//! - **No tracing**: Observability belongs to the application and CLI layers
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Failures are data**: A broken rule is a report entry, not an `Err`
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod registry;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{Entity, Individual, Organization, Person};

pub use error::{DomainError, ErrorCategory};

pub use registry::{ValidatorRegistry, ValidatorRegistryBuilder};

pub use validation::{
    IndividualValidator, OrganizationValidator, PersonValidator, ValidationMessage,
    ValidationReport, Validator,
};

pub use value_objects::{EntityKind, INDIVIDUAL_ID_FORMAT, ORGANIZATION_ID_FORMAT};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Strategy dispatch through the registry
    // ========================================================================

    fn messages_for(entity: &Entity) -> ValidationReport {
        ValidatorRegistry::new()
            .resolve(entity.kind())
            .unwrap()
            .validate(entity)
            .unwrap()
    }

    #[test]
    fn person_validates_clean_through_registry() {
        for name in ["A", "Uma pessoa simples", "x"] {
            assert!(messages_for(&Entity::person(name).unwrap()).is_clean());
        }
    }

    #[test]
    fn individual_identifier_lengths() {
        let ok = Entity::individual("B", "333.333.333-33").unwrap();
        assert!(messages_for(&ok).is_clean());

        for bad in ["", "333.333.33-33", "333.333.333-333"] {
            let report = messages_for(&Entity::individual("C", bad).unwrap());
            assert_eq!(report.len(), 1, "identifier {bad:?}");
            assert!(report.messages()[0].text.contains("correct length"));
        }
    }

    #[test]
    fn organization_identifier_lengths() {
        let ok = Entity::organization("D", "99.999.999/9999-99").unwrap();
        assert!(messages_for(&ok).is_clean());

        let bad = Entity::organization("E", "99.999.999/9999-9").unwrap();
        assert_eq!(messages_for(&bad).len(), 1);
    }

    #[test]
    fn every_registered_validator_rejects_foreign_variants() {
        let registry = ValidatorRegistry::new();
        let person = Entity::person("A").unwrap();

        for kind in [EntityKind::Individual, EntityKind::Organization] {
            let err = registry.resolve(kind).unwrap().validate(&person).unwrap_err();
            assert!(matches!(err, DomainError::VariantMismatch { .. }));
            assert_eq!(err.category(), ErrorCategory::Internal);
        }
    }

    // ========================================================================
    // Error suggestions
    // ========================================================================

    #[test]
    fn unknown_variant_suggestions_list_known_kinds() {
        let err = DomainError::UnknownVariant {
            variant: "robot".into(),
        };
        let suggestions = err.suggestions();
        for kind in EntityKind::ALL {
            assert!(suggestions.iter().any(|s| s.contains(kind.as_str())));
        }
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn missing_identifier_suggests_format() {
        let err = DomainError::MissingIdentifier {
            kind: EntityKind::Individual,
        };
        assert!(err.suggestions().iter().any(|s| s.contains(INDIVIDUAL_ID_FORMAT)));
    }
}
