use super::*;

/// Tests that an added user is contained and a removed user is not.
///
/// Expected: contains_user true after add_user, false after remove_user
#[tokio::test]
async fn add_then_remove_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = user_from(factory::create_user(db).await?);
    let service = GroupService::new(db);
    let group = service.add("Admins", None).await?;

    assert!(!service.contains_user(&group, &user).await?);

    assert!(service.add_user(&group, &user).await?);
    assert!(service.contains_user(&group, &user).await?);

    service.remove_user(&group, &user).await?;
    assert!(!service.contains_user(&group, &user).await?);

    Ok(())
}

/// Tests removing a user who is not a member.
///
/// Expected: Ok
#[tokio::test]
async fn removing_non_member_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = user_from(factory::create_user(db).await?);
    let service = GroupService::new(db);
    let group = service.add("Admins", None).await?;

    let result = service.remove_user(&group, &user).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that get_users returns exactly the contained users.
///
/// Expected: Ok with the members in ID order, excluding non-members
#[tokio::test]
async fn get_users_returns_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = user_from(
        factory::user::UserFactory::new(db)
            .name("Alice")
            .build()
            .await?,
    );
    let bob = user_from(factory::user::UserFactory::new(db).name("Bob").build().await?);
    let carol = user_from(
        factory::user::UserFactory::new(db)
            .name("Carol")
            .build()
            .await?,
    );

    let service = GroupService::new(db);
    let group = service.add("Admins", None).await?;
    service.add_user(&group, &carol).await?;
    service.add_user(&group, &alice).await?;

    let users = service.get_users(&group).await?;

    assert_eq!(users, vec![alice.clone(), carol.clone()]);
    for user in &users {
        assert!(service.contains_user(&group, user).await?);
    }
    assert!(!service.contains_user(&group, &bob).await?);

    Ok(())
}

/// Tests that adding the same user twice keeps a single membership.
///
/// Expected: second add_user returns false and get_users lists the user once
#[tokio::test]
async fn adding_twice_keeps_one_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = user_from(factory::create_user(db).await?);
    let service = GroupService::new(db);
    let group = service.add("Admins", None).await?;

    assert!(service.add_user(&group, &user).await?);
    assert!(!service.add_user(&group, &user).await?);

    let users = service.get_users(&group).await?;
    assert_eq!(users, vec![user]);

    Ok(())
}

/// Tests get_users on a group without members.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn get_users_empty_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GroupService::new(db);
    let group = service.add("Empty", None).await?;

    assert!(service.get_users(&group).await?.is_empty());

    Ok(())
}

/// Tests get_users when a membership points at a missing user.
///
/// The group member table is created without its user foreign key so the orphaned row
/// can exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_users_fails_for_missing_user() -> Result<(), AppError> {
    use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    // Membership table without foreign keys
    db.execute_unprepared(
        r#"CREATE TABLE "groupMembers" ("userID" integer NOT NULL, "groupID" integer NOT NULL, PRIMARY KEY ("userID", "groupID"))"#,
    )
    .await?;

    let service = GroupService::new(db);
    let group = service.add("Admins", None).await?;
    entity::prelude::GroupMember::insert(entity::group_member::ActiveModel {
        user_id: ActiveValue::Set(424242),
        group_id: ActiveValue::Set(group.id()),
    })
    .exec_with_returning(db)
    .await?;

    let result = service.get_users(&group).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
