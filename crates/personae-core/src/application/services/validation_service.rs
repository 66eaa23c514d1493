//! Validation Service - the strategy driver.
//!
//! For each entity this service:
//! 1. Resolves the validator registered for the entity's kind
//! 2. Runs it
//! 3. Packages the report with the entity and validator names

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    domain::{Entity, EntityKind, ValidationReport, ValidatorRegistry},
    error::PersonaeResult,
};

/// Header printed above a non-empty message listing.
pub const MESSAGES_HEADER: &str = "Validation messages:";

/// The result of validating one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub entity: String,
    pub kind: EntityKind,
    pub validator: &'static str,
    pub messages: ValidationReport,
}

impl ValidationOutcome {
    pub fn is_clean(&self) -> bool {
        self.messages.is_clean()
    }

    /// `<name>-<validator>`, the first console line for this entity.
    pub fn title(&self) -> String {
        format!("{}-{}", self.entity, self.validator)
    }

    /// The console listing: title, then header and one indented line per
    /// message when any were recorded.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title()];
        if !self.is_clean() {
            lines.push(MESSAGES_HEADER.to_owned());
            lines.extend(self.messages.messages().iter().map(|m| format!("    {m}")));
        }
        lines
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Resolves and runs validators against entities.
#[derive(Debug, Default)]
pub struct ValidationService {
    registry: ValidatorRegistry,
}

impl ValidationService {
    /// Create a service over the given registry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use personae_core::application::ValidationService;
    /// use personae_core::domain::{Entity, ValidatorRegistry};
    ///
    /// let service = ValidationService::new(ValidatorRegistry::new());
    /// let outcome = service
    ///     .validate(&Entity::individual("José", "333.333.33-33").unwrap())
    ///     .unwrap();
    /// assert!(!outcome.is_clean());
    /// ```
    pub fn new(registry: ValidatorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Validate a single entity.
    ///
    /// Rule failures come back inside the outcome. Only lookup and dispatch
    /// problems are errors.
    #[instrument(skip_all, fields(entity = %entity.name(), kind = %entity.kind()))]
    pub fn validate(&self, entity: &Entity) -> PersonaeResult<ValidationOutcome> {
        let validator = self.registry.resolve(entity.kind())?;
        debug!(validator = validator.name(), "Validator resolved");

        let report = validator.validate(entity)?;
        if report.is_clean() {
            debug!("No validation messages");
        } else {
            info!(count = report.len(), "Validation messages recorded");
        }

        Ok(ValidationOutcome {
            entity: entity.name().to_owned(),
            kind: entity.kind(),
            validator: validator.name(),
            messages: report,
        })
    }

    /// Validate every entity, in order.
    ///
    /// A failed lookup aborts only that entity; the rest are still validated.
    #[instrument(skip_all, fields(count = entities.len()))]
    pub fn validate_all(&self, entities: &[Entity]) -> Vec<PersonaeResult<ValidationOutcome>> {
        entities
            .iter()
            .map(|entity| {
                let result = self.validate(entity);
                if let Err(e) = &result {
                    warn!(entity = %entity.name(), error = %e, "Skipping entity");
                }
                result
            })
            .collect()
    }
}
