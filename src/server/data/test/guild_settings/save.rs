use super::*;

/// Tests the first save of a guild configuration.
///
/// Verifies the concrete scenario from the settings form: four required
/// channels, boolean flags, one threshold, everything else unset. All three
/// records must exist afterwards with empties stored as NULL, never "".
///
/// Expected: Ok with exactly the normalized rows stored
#[tokio::test]
async fn creates_configuration_on_first_save() {
    let test = settings_context().await;
    let db = test.db.as_ref().unwrap();

    let store = GuildSettingsStore::new(db);
    store.save("g1", &minimal_settings()).await.unwrap();

    let channels = entity::prelude::GuildChannels::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(channels.welcome_channel_id, "1");
    assert_eq!(channels.goodbye_channel_id, "2");
    assert_eq!(channels.log_channel_id, "3");
    assert_eq!(channels.bot_announcements_channel_id, "4");
    assert_eq!(channels.raids_td2_channel_id, None);
    assert_eq!(channels.activities_td2_channel_id, None);
    assert_eq!(channels.incursion_channel_id, None);
    assert_eq!(channels.build_channel_id, None);

    let roles = entity::prelude::GuildRoles::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(roles.raid_manager_role_id, None);

    let moderation = entity::prelude::GuildModerationSettings::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert!(moderation.automod_enabled);
    assert!(!moderation.block_invites);
    assert!(!moderation.block_links);
    assert_eq!(moderation.caps_threshold, Some(70));
    assert_eq!(moderation.mention_threshold, None);
    assert_eq!(moderation.mute_role_id, None);
}

/// Tests that saving the same configuration twice is idempotent.
///
/// The second save must leave the configuration fields identical and keep
/// the original `created_at`, with no duplicate rows.
///
/// Expected: Ok with identical stored configuration after both saves
#[tokio::test]
async fn is_idempotent() {
    let test = settings_context().await;
    let db = test.db.as_ref().unwrap();

    let store = GuildSettingsStore::new(db);
    store.save("g1", &full_settings()).await.unwrap();

    let first = entity::prelude::GuildChannels::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();

    store.save("g1", &full_settings()).await.unwrap();

    let second = entity::prelude::GuildChannels::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(second.welcome_channel_id, first.welcome_channel_id);
    assert_eq!(second.raids_td2_channel_id, first.raids_td2_channel_id);
    assert_eq!(second.created_at, first.created_at);

    let count = entity::prelude::GuildChannels::find().count(db).await.unwrap();
    assert_eq!(count, 1);

    let moderation = entity::prelude::GuildModerationSettings::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moderation.caps_threshold, Some(80));
}

/// Tests full-replace semantics for omitted optionals.
///
/// A save with every optional populated followed by a save with them unset
/// must clear the previously stored values back to NULL, not merge.
///
/// Expected: Ok with optionals cleared after the second save
#[tokio::test]
async fn clears_omitted_optionals_on_resave() {
    let test = settings_context().await;
    let db = test.db.as_ref().unwrap();

    let store = GuildSettingsStore::new(db);
    store.save("g1", &full_settings()).await.unwrap();
    store.save("g1", &minimal_settings()).await.unwrap();

    let channels = entity::prelude::GuildChannels::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(channels.raids_td2_channel_id, None);
    assert_eq!(channels.build_channel_id, None);

    let roles = entity::prelude::GuildRoles::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(roles.raid_manager_role_id, None);

    let moderation = entity::prelude::GuildModerationSettings::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moderation.mute_role_id, None);
    assert_eq!(moderation.max_warns_mute_minutes, None);
    assert_eq!(moderation.mention_threshold, None);
    assert!(!moderation.block_invites);
}

/// Tests transactional atomicity when the third write fails.
///
/// The moderation table is deliberately missing from the schema, so the third
/// upsert fails. The previously stored channel and role records must be left
/// exactly as they were.
///
/// Expected: Err, with the first two records unchanged
#[tokio::test]
async fn rolls_back_when_third_write_fails() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildChannels)
        .with_table(entity::prelude::GuildRoles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    // Seed the two existing tables outside the failing transaction
    let channels_repo = GuildChannelsRepository::new(db);
    let roles_repo = GuildRolesRepository::new(db);
    channels_repo
        .upsert("g1", full_settings().channel_bindings())
        .await
        .unwrap();
    roles_repo
        .upsert("g1", full_settings().role_bindings())
        .await
        .unwrap();

    let store = GuildSettingsStore::new(db);
    let result = store.save("g1", &minimal_settings()).await;
    assert!(result.is_err());

    // The attempted replace must not be visible anywhere
    let channels = entity::prelude::GuildChannels::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(channels.welcome_channel_id, "10");
    assert_eq!(channels.raids_td2_channel_id, Some("14".to_string()));

    let roles = entity::prelude::GuildRoles::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(roles.raid_manager_role_id, Some("20".to_string()));
}

/// Tests that a failed first-ever save leaves no partial configuration.
///
/// Same forced failure as above, but with nothing stored beforehand: the
/// channel and role upserts that succeeded inside the transaction must be
/// rolled back.
///
/// Expected: Err, with all tables empty
#[tokio::test]
async fn rolls_back_partial_first_save() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildChannels)
        .with_table(entity::prelude::GuildRoles)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let store = GuildSettingsStore::new(db);
    let result = store.save("g1", &minimal_settings()).await;
    assert!(result.is_err());

    let channel_count = entity::prelude::GuildChannels::find().count(db).await.unwrap();
    let role_count = entity::prelude::GuildRoles::find().count(db).await.unwrap();
    assert_eq!(channel_count, 0);
    assert_eq!(role_count, 0);
}

/// Tests that configurations for different guilds are independent.
///
/// Expected: Ok with separate records per guild
#[tokio::test]
async fn keeps_guilds_independent() {
    let test = settings_context().await;
    let db = test.db.as_ref().unwrap();

    let store = GuildSettingsStore::new(db);
    store.save("g1", &minimal_settings()).await.unwrap();
    store.save("g2", &full_settings()).await.unwrap();

    let g1 = entity::prelude::GuildChannels::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();
    let g2 = entity::prelude::GuildChannels::find_by_id("g2")
        .one(db)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(g1.welcome_channel_id, "1");
    assert_eq!(g2.welcome_channel_id, "10");

    let count = entity::prelude::GuildModerationSettings::find()
        .count(db)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

/// Tests that updates refresh `updated_at` while preserving `created_at`.
///
/// Expected: Ok with created_at stable and updated_at advancing
#[tokio::test]
async fn tracks_timestamps_across_resaves() {
    let test = settings_context().await;
    let db = test.db.as_ref().unwrap();

    let store = GuildSettingsStore::new(db);
    store.save("g1", &minimal_settings()).await.unwrap();

    let first = entity::prelude::GuildModerationSettings::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();

    // Ensure a measurable timestamp difference
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    store.save("g1", &full_settings()).await.unwrap();

    let second = entity::prelude::GuildModerationSettings::find_by_id("g1")
        .one(db)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at > first.updated_at);
}
