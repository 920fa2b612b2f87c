use super::*;

/// Tests setting a description on a group that had none.
///
/// Expected: Ok with the description persisted
#[tokio::test]
async fn sets_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_group(db).await?;

    let repo = GroupRepository::new(db);
    repo.update_description(created.id, "Now described").await?;

    let group = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(group.description(), Some("Now described"));
    assert_eq!(group.name(), created.name);

    Ok(())
}

/// Tests updating the description of a group that does not exist.
///
/// Expected: Ok (zero-row update is not an error)
#[tokio::test]
async fn succeeds_for_nonexistent_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let result = repo.update_description(999999, "Nothing").await;

    assert!(result.is_ok());

    Ok(())
}
