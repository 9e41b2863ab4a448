use super::*;
use test_utils::factory;

/// Tests finding a stored user by their Discord id.
///
/// Expected: Ok(Some) with the stored fields
#[tokio::test]
async fn finds_existing_user() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .discord_id("42")
        .name("Someone")
        .build()
        .await
        .unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(42).await.unwrap().unwrap();

    assert_eq!(user.discord_id, 42);
    assert_eq!(user.name, created.name);
}

/// Tests looking up a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(999).await.unwrap();

    assert!(user.is_none());
}
