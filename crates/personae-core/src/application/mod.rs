//! Application layer for personae.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ValidationService`)
//! - **Demo**: the fixed roster the `personae demo` command validates
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain`.

pub mod demo;
pub mod services;

// Re-export main services
pub use services::{MESSAGES_HEADER, ValidationOutcome, ValidationService};

pub use demo::demo_roster;
