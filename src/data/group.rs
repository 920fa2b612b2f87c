//! Group data repository for database operations.
//!
//! This module provides the `GroupRepository` for managing rows of the `groups` table. Updates
//! and deletes are fire-and-forget: a statement that matches no row is not an error, so an
//! operation on a group that was already deleted completes without complaint.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::group::{CreateGroupParam, Group};

/// Repository providing database operations for group management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting group records.
pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    /// Creates a new GroupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GroupRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new group.
    ///
    /// Inserts a row with the given name and optional description. Names are not
    /// checked for duplicates.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing name and description
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateGroupParam) -> Result<Group, DbErr> {
        let entity = entity::group::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    /// Finds a group by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - Group found
    /// - `Ok(None)` - No group with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Finds a group by name.
    ///
    /// Names are not unique in the schema. When several rows share the name, the one
    /// with the lowest ID is returned.
    ///
    /// # Returns
    /// - `Ok(Some(Group))` - Group found
    /// - `Ok(None)` - No group with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find()
            .filter(entity::group::Column::Name.eq(name))
            .order_by_asc(entity::group::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Updates the name of a group.
    ///
    /// # Returns
    /// - `Ok(())` - Update executed (or no matching group found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_name(&self, id: i32, name: &str) -> Result<(), DbErr> {
        entity::prelude::Group::update_many()
            .filter(entity::group::Column::Id.eq(id))
            .col_expr(
                entity::group::Column::Name,
                sea_orm::sea_query::Expr::value(name),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Updates the description of a group.
    ///
    /// # Returns
    /// - `Ok(())` - Update executed (or no matching group found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_description(&self, id: i32, description: &str) -> Result<(), DbErr> {
        entity::prelude::Group::update_many()
            .filter(entity::group::Column::Id.eq(id))
            .col_expr(
                entity::group::Column::Description,
                sea_orm::sea_query::Expr::value(description),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a group by ID.
    ///
    /// Membership rows are removed by the `ON DELETE CASCADE` foreign key; callers that
    /// cannot rely on foreign key enforcement should delete them first through
    /// `GroupMemberRepository::delete_by_group`.
    ///
    /// # Returns
    /// - `Ok(())` - Delete executed (or no matching group found)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Group::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
