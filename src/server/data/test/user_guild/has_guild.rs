use super::*;

/// Tests access lookup for a synced guild.
///
/// Expected: Ok(true)
#[tokio::test]
async fn finds_synced_guild() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserGuildRepository::new(db);
    repo.replace_for_user(1, &[guild(10, "Alpha")]).await.unwrap();

    assert!(repo.has_guild(1, 10).await.unwrap());
}

/// Tests access lookup for a guild the user cannot manage.
///
/// Expected: Ok(false) for unknown guilds and other users' guilds
#[tokio::test]
async fn rejects_unsynced_guild() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserGuildRepository::new(db);
    repo.replace_for_user(1, &[guild(10, "Alpha")]).await.unwrap();

    assert!(!repo.has_guild(1, 11).await.unwrap());
    assert!(!repo.has_guild(2, 10).await.unwrap());
}
