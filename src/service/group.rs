use sea_orm::DatabaseConnection;

use crate::{
    data::{group::GroupRepository, group_member::GroupMemberRepository},
    error::AppError,
    model::{
        group::{CreateGroupParam, Group, GroupKey},
        user::User,
    },
    service::user::UserService,
};

/// Operations on groups and their memberships.
///
/// Every method issues its statements immediately and awaits them; nothing is cached
/// and no statement is retried. Statements are not wrapped in transactions.
pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads an existing group by ID or by name.
    ///
    /// # Returns
    /// - `Ok(Group)` - Snapshot of the matching row
    /// - `Err(AppError::NotFound)` - No row matches the key
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn lookup(&self, key: GroupKey) -> Result<Group, AppError> {
        let repo = GroupRepository::new(self.db);

        let group = match &key {
            GroupKey::Id(id) => repo.find_by_id(*id).await?,
            GroupKey::Name(name) => repo.find_by_name(name).await?,
        };

        group.ok_or_else(|| AppError::NotFound(format!("Group with {} not found", key)))
    }

    /// Creates a new group and returns it with its generated ID.
    pub async fn add(
        &self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Group, AppError> {
        let group = GroupRepository::new(self.db)
            .create(CreateGroupParam {
                name: name.into(),
                description,
            })
            .await?;

        tracing::info!("Created group {} ({})", group.id, group.name);

        Ok(group)
    }

    /// Renames a group, writing the store before the snapshot
    pub async fn set_name(
        &self,
        group: &mut Group,
        name: impl Into<String>,
    ) -> Result<(), AppError> {
        let name = name.into();

        GroupRepository::new(self.db)
            .update_name(group.id, &name)
            .await?;

        group.name = name;

        Ok(())
    }

    /// Changes a group's description, writing the store before the snapshot
    pub async fn set_description(
        &self,
        group: &mut Group,
        description: impl Into<String>,
    ) -> Result<(), AppError> {
        let description = description.into();

        GroupRepository::new(self.db)
            .update_description(group.id, &description)
            .await?;

        group.description = Some(description);

        Ok(())
    }

    /// Gets every member of a group.
    ///
    /// Each member is loaded individually through `UserService`, so a membership
    /// pointing at a user that no longer exists fails the whole call.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Members ordered by user ID
    /// - `Err(AppError::NotFound)` - A referenced user does not exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_users(&self, group: &Group) -> Result<Vec<User>, AppError> {
        let user_ids = GroupMemberRepository::new(self.db)
            .get_user_ids_by_group(group.id)
            .await?;

        let user_service = UserService::new(self.db);
        let mut users = Vec::with_capacity(user_ids.len());
        for user_id in user_ids {
            users.push(user_service.get_by_id(user_id).await?);
        }

        Ok(users)
    }

    /// Adds a user to a group.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was added
    /// - `Ok(false)` - The user was already a member; nothing was written
    /// - `Err(AppError::DbErr)` - Database error, including a missing user or group when
    ///   foreign keys are enforced
    pub async fn add_user(&self, group: &Group, user: &User) -> Result<bool, AppError> {
        let added = GroupMemberRepository::new(self.db)
            .create(user.id, group.id)
            .await?;

        if added {
            tracing::debug!("Added user {} to group {}", user.id, group.id);
        } else {
            tracing::debug!("User {} already in group {}", user.id, group.id);
        }

        Ok(added)
    }

    /// Removes a user from a group. Removing a non-member is not an error.
    pub async fn remove_user(&self, group: &Group, user: &User) -> Result<(), AppError> {
        GroupMemberRepository::new(self.db)
            .delete(user.id, group.id)
            .await?;

        tracing::debug!("Removed user {} from group {}", user.id, group.id);

        Ok(())
    }

    /// Checks whether a user is a member of a group
    pub async fn contains_user(&self, group: &Group, user: &User) -> Result<bool, AppError> {
        Ok(GroupMemberRepository::new(self.db)
            .exists(user.id, group.id)
            .await?)
    }

    /// Deletes a group together with its memberships.
    ///
    /// Consumes the snapshot since the row it describes no longer exists afterwards.
    /// Memberships are deleted explicitly before the group row, so they are cleaned up
    /// even when the connection does not enforce foreign keys.
    pub async fn remove(&self, group: Group) -> Result<(), AppError> {
        let removed_members = GroupMemberRepository::new(self.db)
            .delete_by_group(group.id)
            .await?;

        GroupRepository::new(self.db).delete(group.id).await?;

        tracing::info!(
            "Removed group {} ({}) and {} memberships",
            group.id,
            group.name,
            removed_members
        );

        Ok(())
    }
}
