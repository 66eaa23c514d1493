//! The `Entity` sum type and its variant records.
//!
//! Each variant carries only its own fields; the shared `name` is reached
//! through [`Entity::name`]. Entities are immutable value objects: they are
//! created once, validated, and discarded.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::EntityKind};

// ── Variant records ──────────────────────────────────────────────────────────

/// A generic person with no identifying document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A natural person, identified by a `333.333.333-33` style number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Individual {
    name: String,
    identifier: String,
}

impl Individual {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// A legal entity, identified by a `99.999.999/9999-99` style number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Organization {
    name: String,
    identifier: String,
}

impl Organization {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

// ── Sum type ─────────────────────────────────────────────────────────────────

/// An entity subject to variant-specific validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entity {
    Person(Person),
    Individual(Individual),
    Organization(Organization),
}

impl Entity {
    /// Build a plain person.
    pub fn person(name: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self::Person(Person {
            name: checked_name(name.into())?,
        }))
    }

    /// Build an individual. The identifier is stored as given; its shape is
    /// the validator's concern, not the constructor's.
    pub fn individual(
        name: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self::Individual(Individual {
            name: checked_name(name.into())?,
            identifier: identifier.into(),
        }))
    }

    /// Build an organization.
    pub fn organization(
        name: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self::Organization(Organization {
            name: checked_name(name.into())?,
            identifier: identifier.into(),
        }))
    }

    /// Build an entity of `kind` from loose parts, as collected from user
    /// input.
    ///
    /// A person ignores `identifier`; the other kinds require one.
    pub fn from_parts(
        kind: EntityKind,
        name: impl Into<String>,
        identifier: Option<String>,
    ) -> Result<Self, DomainError> {
        match (kind, identifier) {
            (EntityKind::Person, _) => Self::person(name),
            (EntityKind::Individual, Some(id)) => Self::individual(name, id),
            (EntityKind::Organization, Some(id)) => Self::organization(name, id),
            (kind, None) => Err(DomainError::MissingIdentifier { kind }),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Person(p) => p.name(),
            Self::Individual(i) => i.name(),
            Self::Organization(o) => o.name(),
        }
    }

    /// The variant tag used to resolve this entity's validator.
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Person(_) => EntityKind::Person,
            Self::Individual(_) => EntityKind::Individual,
            Self::Organization(_) => EntityKind::Organization,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Person(_) => None,
            Self::Individual(i) => Some(i.identifier()),
            Self::Organization(o) => Some(o.identifier()),
        }
    }

    /// Re-check construction invariants.
    ///
    /// Constructors enforce these already; this exists for entities obtained
    /// through deserialization.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name().trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.kind())?;
        if let Some(id) = self.identifier() {
            write!(f, " [{id}]")?;
        }
        Ok(())
    }
}

fn checked_name(name: String) -> Result<String, DomainError> {
    if name.trim().is_empty() {
        Err(DomainError::EmptyName)
    } else {
        Ok(name)
    }
}
