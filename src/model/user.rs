//! User domain model.

use serde::Serialize;

/// A user that can be a member of groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Primary key of the user row.
    pub id: i32,
    /// Display name of the user.
    pub name: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
