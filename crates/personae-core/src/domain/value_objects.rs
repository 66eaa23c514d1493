//! Domain value objects: the entity variant tag.
//!
//! # Design
//!
//! [`EntityKind`] is a pure value type: `Copy`, equality-by-value, no
//! identity. It is the key of the validator registry, so it replaces any
//! reliance on runtime type identity. This file's only job is to define the
//! tag, its string representations, and its `FromStr` parser.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here (and to [`EntityKind::ALL`])
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add an `Entity` variant and a validator, then register it in
//!    `registry.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Expected layout of an individual's identifier.
pub const INDIVIDUAL_ID_FORMAT: &str = "333.333.333-33";

/// Expected layout of an organization's identifier.
pub const ORGANIZATION_ID_FORMAT: &str = "99.999.999/9999-99";

// ── EntityKind ───────────────────────────────────────────────────────────────

/// The mutually exclusive kinds an entity can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Person,
    Individual,
    Organization,
}

impl EntityKind {
    /// Every known kind, in registration order.
    pub const ALL: [EntityKind; 3] = [Self::Person, Self::Individual, Self::Organization];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Individual => "individual",
            Self::Organization => "organization",
        }
    }

    /// Whether entities of this kind carry an identifier.
    pub const fn has_identifier(self) -> bool {
        !matches!(self, Self::Person)
    }

    /// The identifier layout entities of this kind are checked against.
    pub const fn identifier_format(self) -> Option<&'static str> {
        match self {
            Self::Person => None,
            Self::Individual => Some(INDIVIDUAL_ID_FORMAT),
            Self::Organization => Some(ORGANIZATION_ID_FORMAT),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "person" | "base" => Ok(Self::Person),
            "individual" | "individual-entity" | "pf" => Ok(Self::Individual),
            "organization" | "organisation" | "org" | "pj" => Ok(Self::Organization),
            other => Err(DomainError::UnknownVariant {
                variant: other.to_owned(),
            }),
        }
    }
}
