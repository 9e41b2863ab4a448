use super::*;

/// Tests loading a guild that was never configured.
///
/// Expected: Ok with all three records absent and fully-defaulted form values
#[tokio::test]
async fn loads_empty_configuration() {
    let test = settings_context().await;
    let db = test.db.as_ref().unwrap();

    let store = GuildSettingsStore::new(db);
    let configuration = store.load("g1").await.unwrap();

    assert!(configuration.channels.is_none());
    assert!(configuration.roles.is_none());
    assert!(configuration.moderation.is_none());

    let form = configuration.into_form_dto();
    assert_eq!(form.welcome_channel_id, "");
    assert_eq!(form.raid_manager_role_id, "");
    assert_eq!(form.caps_threshold, None);
    assert!(!form.automod_enabled);
}

/// Tests that a saved configuration reads back as its normalized form.
///
/// NULL optionals must surface as empty strings for the id fields and `None`
/// for thresholds, matching what the form expects as initial values.
///
/// Expected: Ok with the defaulted/normalized form of the saved payload
#[tokio::test]
async fn roundtrips_saved_configuration() {
    let test = settings_context().await;
    let db = test.db.as_ref().unwrap();

    let store = GuildSettingsStore::new(db);
    store.save("g1", &minimal_settings()).await.unwrap();

    let form = store.load("g1").await.unwrap().into_form_dto();

    assert_eq!(form.welcome_channel_id, "1");
    assert_eq!(form.goodbye_channel_id, "2");
    assert_eq!(form.log_channel_id, "3");
    assert_eq!(form.bot_announcements_channel_id, "4");
    assert_eq!(form.raids_td2_channel_id, "");
    assert_eq!(form.mute_role_id, "");
    assert_eq!(form.caps_threshold, Some(70));
    assert_eq!(form.mention_threshold, None);
    assert!(form.automod_enabled);
    assert!(!form.block_invites);
}

/// Tests that load reflects every field of a fully-populated save.
///
/// Expected: Ok with all optionals populated
#[tokio::test]
async fn roundtrips_full_configuration() {
    let test = settings_context().await;
    let db = test.db.as_ref().unwrap();

    let store = GuildSettingsStore::new(db);
    store.save("g1", &full_settings()).await.unwrap();

    let configuration = store.load("g1").await.unwrap();
    let channels = configuration.channels.as_ref().unwrap();
    assert_eq!(channels.raids_td2_channel_id, Some("14".to_string()));

    let moderation = configuration.moderation.as_ref().unwrap();
    assert_eq!(moderation.mute_role_id, Some("21".to_string()));
    assert_eq!(moderation.max_warns_ban_days, Some(7));

    let form = configuration.into_form_dto();
    assert_eq!(form.build_channel_id, "17");
    assert_eq!(form.raid_manager_role_id, "20");
    assert_eq!(form.warn_decay_days, Some(30));
    assert!(form.block_invites);
}
