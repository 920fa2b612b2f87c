use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with a generated ID and the given name
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create("Alice").await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Alice");

    Ok(())
}
