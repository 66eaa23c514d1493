pub mod entity;

pub use crate::domain::DomainError;
pub use entity::{Entity, Individual, Organization, Person};
