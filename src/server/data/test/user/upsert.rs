use super::*;

/// Tests creating a new user on first login.
///
/// Expected: Ok with the user stored under their Discord id
#[tokio::test]
async fn creates_new_user() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "Agent".to_string(),
            avatar_hash: Some("abc".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "Agent");
    assert_eq!(user.avatar_hash, Some("abc".to_string()));
}

/// Tests that a re-login refreshes name and avatar without duplicating rows.
///
/// Expected: Ok with updated profile fields on the same row
#[tokio::test]
async fn refreshes_existing_user() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(UpsertUserParam {
        discord_id: 123456789,
        name: "Agent".to_string(),
        avatar_hash: None,
    })
    .await
    .unwrap();

    let updated = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "Renamed Agent".to_string(),
            avatar_hash: Some("def".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed Agent");
    assert_eq!(updated.avatar_hash, Some("def".to_string()));

    let stored = repo.find_by_discord_id(123456789).await.unwrap().unwrap();
    assert_eq!(stored.name, "Renamed Agent");
}
