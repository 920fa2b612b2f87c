use super::*;

/// Tests creating a group with a description.
///
/// Expected: Ok with generated ID, and the row persisted with the same values
#[tokio::test]
async fn creates_group_with_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParam {
            name: "Admins".to_string(),
            description: Some("Admin group".to_string()),
        })
        .await?;

    assert!(group.id() > 0);
    assert_eq!(group.name(), "Admins");
    assert_eq!(group.description(), Some("Admin group"));

    let row = entity::prelude::Group::find_by_id(group.id())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(row.name, "Admins");
    assert_eq!(row.description.as_deref(), Some("Admin group"));

    Ok(())
}

/// Tests creating a group without a description.
///
/// Expected: Ok with description stored as NULL
#[tokio::test]
async fn creates_group_without_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParam {
            name: "Users".to_string(),
            description: None,
        })
        .await?;

    assert!(group.description().is_none());

    Ok(())
}

/// Tests creating two groups with the same name.
///
/// Names are not unique in the schema, so both inserts succeed with distinct IDs.
///
/// Expected: Ok for both, different IDs
#[tokio::test]
async fn allows_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let first = repo
        .create(CreateGroupParam {
            name: "Admins".to_string(),
            description: None,
        })
        .await?;
    let second = repo
        .create(CreateGroupParam {
            name: "Admins".to_string(),
            description: None,
        })
        .await?;

    assert_ne!(first.id(), second.id());

    Ok(())
}
