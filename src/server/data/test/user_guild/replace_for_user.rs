use super::*;

/// Tests the initial sync of a user's manageable guilds.
///
/// Expected: Ok with one row per guild
#[tokio::test]
async fn creates_rows_on_first_sync() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserGuildRepository::new(db);
    repo.replace_for_user(1, &[guild(10, "Alpha"), guild(11, "Beta")])
        .await
        .unwrap();

    let guilds = repo.get_by_user(1).await.unwrap();
    assert_eq!(guilds.len(), 2);
    assert!(guilds.iter().any(|g| g.guild_id == 10 && g.name == "Alpha"));
    assert!(guilds.iter().any(|g| g.guild_id == 11 && g.name == "Beta"));
}

/// Tests that a re-login replaces the list instead of merging.
///
/// Guilds the user lost access to must disappear; new ones must appear.
///
/// Expected: Ok with only the newly provided guilds stored
#[tokio::test]
async fn replaces_previous_rows() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserGuildRepository::new(db);
    repo.replace_for_user(1, &[guild(10, "Alpha"), guild(11, "Beta")])
        .await
        .unwrap();
    repo.replace_for_user(1, &[guild(11, "Beta"), guild(12, "Gamma")])
        .await
        .unwrap();

    let guilds = repo.get_by_user(1).await.unwrap();
    assert_eq!(guilds.len(), 2);
    assert!(!guilds.iter().any(|g| g.guild_id == 10));
    assert!(guilds.iter().any(|g| g.guild_id == 12));
}

/// Tests syncing an empty guild list.
///
/// A user who lost every manageable guild ends up with no rows.
///
/// Expected: Ok with no rows remaining
#[tokio::test]
async fn clears_rows_for_empty_list() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserGuildRepository::new(db);
    repo.replace_for_user(1, &[guild(10, "Alpha")]).await.unwrap();
    repo.replace_for_user(1, &[]).await.unwrap();

    let guilds = repo.get_by_user(1).await.unwrap();
    assert!(guilds.is_empty());
}

/// Tests that replacing one user's rows leaves other users untouched.
///
/// Expected: Ok with the other user's rows intact
#[tokio::test]
async fn leaves_other_users_alone() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserGuildRepository::new(db);
    repo.replace_for_user(1, &[guild(10, "Alpha")]).await.unwrap();
    repo.replace_for_user(2, &[guild(10, "Alpha"), guild(11, "Beta")])
        .await
        .unwrap();

    repo.replace_for_user(1, &[]).await.unwrap();

    let other = repo.get_by_user(2).await.unwrap();
    assert_eq!(other.len(), 2);
}
