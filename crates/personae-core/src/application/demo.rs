//! The demonstration roster.

use crate::domain::{DomainError, Entity};

/// Mixed-variant entities validated by `personae demo`.
///
/// José's identifier is one digit short, so his is the only entry that
/// produces a validation message.
pub fn demo_roster() -> Result<Vec<Entity>, DomainError> {
    Ok(vec![
        Entity::person("A plain person")?,
        Entity::individual("João", "333.333.333-33")?,
        Entity::individual("José", "333.333.33-33")?,
        Entity::organization("Maria", "99.999.999/9999-99")?,
    ])
}
