//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a group and `count` users who are all members of it.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of member users to create
///
/// # Returns
/// - `Ok((group, users))` - The group and its members in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_members(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::group::Model, Vec<entity::user::Model>), DbErr> {
    let group = crate::factory::group::create_group(db).await?;

    let mut users = Vec::with_capacity(count);
    for _ in 0..count {
        let user = crate::factory::user::create_user(db).await?;
        crate::factory::group_member::create_group_member(db, user.id, group.id).await?;
        users.push(user);
    }

    Ok((group, users))
}
