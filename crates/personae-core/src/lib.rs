//! personae Core - strategy-pattern entity validation
//!
//! This crate provides the domain and application layers for the personae
//! demo: a small family of entities, one validator per entity variant, and
//! a registry that picks the validator at runtime.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          personae-cli (CLI)             │
//! │     (renders outcomes, exit codes)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ resolves via
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Domain Layer (Pure Logic)          │
//! │  (Entity, Validator, ValidatorRegistry) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use personae_core::prelude::*;
//!
//! let service = ValidationService::new(ValidatorRegistry::new());
//! let entity = Entity::organization("Maria", "99.999.999/9999-99").unwrap();
//!
//! let outcome = service.validate(&entity).unwrap();
//! assert_eq!(outcome.title(), "Maria-OrganizationValidator");
//! assert!(outcome.is_clean());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ValidationOutcome, ValidationService, demo_roster};
    pub use crate::domain::{
        DomainError, Entity, EntityKind, ValidationMessage, ValidationReport, Validator,
        ValidatorRegistry,
    };
    pub use crate::error::{PersonaeError, PersonaeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
