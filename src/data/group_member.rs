//! Group member repository for database operations.
//!
//! This module provides the `GroupMemberRepository` for the many-to-many relationship between
//! users and groups stored in `groupMembers`. A pair is stored at most once.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

/// Repository for user-group membership operations.
pub struct GroupMemberRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> GroupMemberRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a membership between a user and a group.
    ///
    /// Checks for an existing pair first and only inserts when there is none.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `group_id` - ID of the group
    ///
    /// # Returns
    /// - `Ok(true)` - The membership was created
    /// - `Ok(false)` - The user was already a member
    /// - `Err(DbErr)` - Database error (e.g., foreign key constraint violation)
    pub async fn create(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        if self.exists(user_id, group_id).await? {
            return Ok(false);
        }

        entity::prelude::GroupMember::insert(entity::group_member::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group_id),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(true)
    }

    /// Deletes a specific membership.
    ///
    /// # Returns
    /// - `Ok(())` - Delete executed (a missing pair is not an error)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, user_id: i32, group_id: i32) -> Result<(), DbErr> {
        entity::prelude::GroupMember::delete_many()
            .filter(entity::group_member::Column::UserId.eq(user_id))
            .filter(entity::group_member::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes every membership of a group.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of memberships removed
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete_by_group(&self, group_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::GroupMember::delete_many()
            .filter(entity::group_member::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Checks whether a user is a member of a group.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one matching pair exists
    /// - `Ok(false)` - No matching pair
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::GroupMember::find()
            .filter(entity::group_member::Column::UserId.eq(user_id))
            .filter(entity::group_member::Column::GroupId.eq(group_id))
            .count(self.db)
            .await?;

        Ok(count != 0)
    }

    /// Gets the IDs of all users in a group, ordered by user ID.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Member user IDs (empty if the group has no members)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_user_ids_by_group(&self, group_id: i32) -> Result<Vec<i32>, DbErr> {
        let members = entity::prelude::GroupMember::find()
            .filter(entity::group_member::Column::GroupId.eq(group_id))
            .order_by_asc(entity::group_member::Column::UserId)
            .all(self.db)
            .await?;

        Ok(members.into_iter().map(|m| m.user_id).collect())
    }
}
