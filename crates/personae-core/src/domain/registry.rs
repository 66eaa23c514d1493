//! Validator registry: the strategy lookup table.
//!
//! Each [`EntityKind`] maps to exactly one [`Validator`]. The table is filled
//! once at construction and only read afterwards; there is no way to add or
//! replace a validator on a built registry.
//!
//! # Adding a New Variant
//!
//! 1. Add the variant to `EntityKind` and `Entity`
//! 2. Write its `Validator` in `validation.rs`
//! 3. Register it in [`ValidatorRegistry::new`]

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{
    error::DomainError,
    validation::{IndividualValidator, OrganizationValidator, PersonValidator, Validator},
    value_objects::EntityKind,
};

/// Lookup table from entity variant to its validator.
pub struct ValidatorRegistry {
    entries: BTreeMap<EntityKind, Box<dyn Validator>>,
}

impl ValidatorRegistry {
    /// Registry with one validator for every known kind.
    pub fn new() -> Self {
        let mut entries: BTreeMap<EntityKind, Box<dyn Validator>> = BTreeMap::new();
        entries.insert(EntityKind::Person, Box::new(PersonValidator));
        entries.insert(EntityKind::Individual, Box::new(IndividualValidator));
        entries.insert(EntityKind::Organization, Box::new(OrganizationValidator));
        Self { entries }
    }

    /// Start an empty registry and choose its validators explicitly.
    pub fn builder() -> ValidatorRegistryBuilder {
        ValidatorRegistryBuilder::default()
    }

    /// Find the validator registered for `kind`.
    ///
    /// # Errors
    /// [`DomainError::UnknownVariant`] if nothing was registered for `kind`.
    pub fn resolve(&self, kind: EntityKind) -> Result<&dyn Validator, DomainError> {
        self.entries
            .get(&kind)
            .map(|v| v.as_ref())
            .ok_or_else(|| DomainError::UnknownVariant {
                variant: kind.to_string(),
            })
    }

    /// Parse a variant tag and resolve it.
    pub fn resolve_tag(&self, tag: &str) -> Result<&dyn Validator, DomainError> {
        self.resolve(tag.parse()?)
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Registered kinds with their validator names, ordered by kind.
    pub fn kinds(&self) -> impl Iterator<Item = (EntityKind, &'static str)> + '_ {
        self.entries.iter().map(|(kind, v)| (*kind, v.name()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.kinds()).finish()
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Collects validators for [`ValidatorRegistry::builder`].
#[derive(Default)]
pub struct ValidatorRegistryBuilder {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorRegistryBuilder {
    pub fn register<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Freeze the collected validators into a registry.
    ///
    /// # Errors
    /// [`DomainError::DuplicateValidator`] if two validators claim the same
    /// kind.
    pub fn build(self) -> Result<ValidatorRegistry, DomainError> {
        let mut entries = BTreeMap::new();
        for validator in self.validators {
            let kind = validator.kind();
            if entries.insert(kind, validator).is_some() {
                return Err(DomainError::DuplicateValidator { kind });
            }
        }
        Ok(ValidatorRegistry { entries })
    }
}
