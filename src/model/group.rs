//! Group domain model, lookup keys, and parameters.
//!
//! A `Group` is a snapshot of one `groups` row. It is live while the row exists and goes
//! stale silently once the row is deleted or changed elsewhere; nothing tracks that
//! transition.

use std::fmt;

use serde::Serialize;

use crate::error::AppError;

/// Snapshot of a row in the `groups` table.
///
/// Fields are read through accessors. The ID never changes after the value is
/// created; name and description are only changed by `GroupService`, which writes
/// the store before updating the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
}

impl Group {
    /// Converts an entity model to the group domain model.
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Key used to look up an existing group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKey {
    /// Match on the `id` column.
    Id(i32),
    /// Match on the `name` column.
    Name(String),
}

impl GroupKey {
    /// Raw lookup mode selecting the `id` column.
    pub const GET_BY_ID: i32 = 0;
    /// Raw lookup mode selecting the `name` column.
    pub const GET_BY_NAME: i32 = 1;

    /// Builds a lookup key from an untyped identifier and a raw mode code.
    ///
    /// # Arguments
    /// - `identifier` - Group ID in decimal form for `GET_BY_ID`, group name for `GET_BY_NAME`
    /// - `mode` - One of `GET_BY_ID` or `GET_BY_NAME`
    ///
    /// # Returns
    /// - `Ok(GroupKey)` - Key for the requested column
    /// - `Err(AppError::BadRequest)` - Unknown mode, or an ID that is not an integer
    pub fn from_raw(identifier: &str, mode: i32) -> Result<Self, AppError> {
        match mode {
            Self::GET_BY_ID => identifier.trim().parse::<i32>().map(Self::Id).map_err(|e| {
                AppError::BadRequest(format!("Invalid group ID '{}': {}", identifier, e))
            }),
            Self::GET_BY_NAME => Ok(Self::Name(identifier.to_string())),
            other => Err(AppError::BadRequest(format!(
                "Unknown group lookup mode: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {}", id),
            Self::Name(name) => write!(f, "name '{}'", name),
        }
    }
}

/// Parameters for creating a new group.
#[derive(Debug, Clone)]
pub struct CreateGroupParam {
    pub name: String,
    pub description: Option<String>,
}
