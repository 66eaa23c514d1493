//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer to accomplish high-level use cases
//! like "validate this entity" or "validate a whole roster".

pub mod validation_service;

pub use validation_service::{MESSAGES_HEADER, ValidationOutcome, ValidationService};
