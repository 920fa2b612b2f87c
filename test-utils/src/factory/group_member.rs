//! Group member factory for creating user-group membership entities.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Creates a membership linking a user to a group.
///
/// The user and group must already exist. Inserting a pair that already exists
/// fails with a primary key violation.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the member user
/// - `group_id` - ID of the group
///
/// # Returns
/// - `Ok(entity::group_member::Model)` - Created membership
/// - `Err(DbErr)` - Database error during insert
pub async fn create_group_member(
    db: &DatabaseConnection,
    user_id: i32,
    group_id: i32,
) -> Result<entity::group_member::Model, DbErr> {
    entity::prelude::GroupMember::insert(entity::group_member::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        group_id: ActiveValue::Set(group_id),
    })
    .exec_with_returning(db)
    .await
}
