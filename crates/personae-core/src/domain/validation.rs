//! The validator capability and its per-variant implementations.
//!
//! A [`Validator`] inspects one entity and returns a fresh
//! [`ValidationReport`]. Rule failures are recorded in the report; only
//! dispatch mistakes (handing a validator the wrong variant) are errors.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::Entity,
    error::DomainError,
    value_objects::{EntityKind, INDIVIDUAL_ID_FORMAT, ORGANIZATION_ID_FORMAT},
};

// ── Report ───────────────────────────────────────────────────────────────────

/// One failed rule: the key identifying the rule's owner and the text shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    pub key: &'static str,
    pub text: String,
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.key, self.text)
    }
}

/// Messages recorded by a single validation run.
///
/// Keys are unique; recording under an existing key replaces its text but
/// keeps its position. An empty report means no rule failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    messages: Vec<ValidationMessage>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: &'static str, text: impl Into<String>) {
        let text = text.into();
        match self.messages.iter_mut().find(|m| m.key == key) {
            Some(existing) => existing.text = text,
            None => self.messages.push(ValidationMessage { key, text }),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages in the order they were first recorded.
    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.text.as_str())
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationMessage;
    type IntoIter = std::slice::Iter<'a, ValidationMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

// ── Capability ───────────────────────────────────────────────────────────────

/// Validates entities of exactly one [`EntityKind`].
#[cfg_attr(test, mockall::automock)]
pub trait Validator {
    /// Type name shown next to the entity and used as the message key.
    fn name(&self) -> &'static str;

    /// The variant this validator accepts.
    fn kind(&self) -> EntityKind;

    /// Run every rule against `entity`.
    ///
    /// # Errors
    /// [`DomainError::VariantMismatch`] if `entity` is not of [`Self::kind`].
    fn validate(&self, entity: &Entity) -> Result<ValidationReport, DomainError>;
}

fn mismatch(validator: &dyn Validator, entity: &Entity) -> DomainError {
    DomainError::VariantMismatch {
        validator: validator.name(),
        expected: validator.kind(),
        found: entity.kind(),
    }
}

/// Identifier lengths are counted in characters, not bytes.
fn has_length_of(identifier: &str, format: &str) -> bool {
    identifier.chars().count() == format.chars().count()
}

// ── Implementations ──────────────────────────────────────────────────────────

/// Accepts any plain person.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonValidator;

impl Validator for PersonValidator {
    fn name(&self) -> &'static str {
        "PersonValidator"
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Person
    }

    fn validate(&self, entity: &Entity) -> Result<ValidationReport, DomainError> {
        match entity {
            Entity::Person(_) => Ok(ValidationReport::new()),
            other => Err(mismatch(self, other)),
        }
    }
}

/// Checks an individual's identifier length against [`INDIVIDUAL_ID_FORMAT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IndividualValidator;

impl IndividualValidator {
    pub const LENGTH_MESSAGE: &'static str = "identifier does not have the correct length";
}

impl Validator for IndividualValidator {
    fn name(&self) -> &'static str {
        "IndividualValidator"
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Individual
    }

    fn validate(&self, entity: &Entity) -> Result<ValidationReport, DomainError> {
        let Entity::Individual(individual) = entity else {
            return Err(mismatch(self, entity));
        };

        let mut report = ValidationReport::new();
        if !has_length_of(individual.identifier(), INDIVIDUAL_ID_FORMAT) {
            report.record(self.name(), Self::LENGTH_MESSAGE);
        }
        Ok(report)
    }
}

/// Checks an organization's identifier length against
/// [`ORGANIZATION_ID_FORMAT`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganizationValidator;

impl OrganizationValidator {
    pub const LENGTH_MESSAGE: &'static str = "identifier length is invalid";
}

impl Validator for OrganizationValidator {
    fn name(&self) -> &'static str {
        "OrganizationValidator"
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Organization
    }

    fn validate(&self, entity: &Entity) -> Result<ValidationReport, DomainError> {
        let Entity::Organization(organization) = entity else {
            return Err(mismatch(self, entity));
        };

        let mut report = ValidationReport::new();
        if !has_length_of(organization.identifier(), ORGANIZATION_ID_FORMAT) {
            report.record(self.name(), Self::LENGTH_MESSAGE);
        }
        Ok(report)
    }
}
