use super::*;

/// Tests removing every membership of a group.
///
/// Expected: Ok with the number of removed rows, other groups untouched
#[tokio::test]
async fn deletes_all_memberships_of_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, _users) = factory::helpers::create_group_with_members(db, 3).await?;
    let (other_group, _other_users) = factory::helpers::create_group_with_members(db, 2).await?;

    let repo = GroupMemberRepository::new(db);
    let removed = repo.delete_by_group(group.id).await?;

    assert_eq!(removed, 3);
    assert!(repo.get_user_ids_by_group(group.id).await?.is_empty());
    assert_eq!(repo.get_user_ids_by_group(other_group.id).await?.len(), 2);

    Ok(())
}

/// Tests removing memberships of a group that has none.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_empty_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let repo = GroupMemberRepository::new(db);
    let removed = repo.delete_by_group(group.id).await?;

    assert_eq!(removed, 0);

    Ok(())
}
