use super::*;
use test_utils::builder::TestBuilder;

/// Tests that a body that is not JSON at all is rejected as malformed.
///
/// Expected: Err(SettingsErr(MalformedInput)) without touching the database
#[tokio::test]
async fn rejects_unparseable_body() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildSettingsService::new(db);
    let result = service.apply(1, b"not json at all").await;

    assert!(matches!(
        result,
        Err(AppError::SettingsErr(SettingsError::MalformedInput))
    ));
}

/// Tests that well-formed JSON that is not an object is rejected as malformed.
///
/// Expected: Err(SettingsErr(MalformedInput))
#[tokio::test]
async fn rejects_non_object_body() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildSettingsService::new(db);
    let result = service.apply(1, b"[1, 2, 3]").await;

    assert!(matches!(
        result,
        Err(AppError::SettingsErr(SettingsError::MalformedInput))
    ));
}

/// Tests that schema violations surface with their field detail map.
///
/// Expected: Err(SettingsErr(SchemaViolation)) naming the missing field
#[tokio::test]
async fn reports_schema_violations_with_details() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("welcomeChannelId");
    let body = serde_json::to_vec(&payload).unwrap();

    let service = GuildSettingsService::new(db);
    let result = service.apply(1, &body).await;

    match result {
        Err(AppError::SettingsErr(SettingsError::SchemaViolation(violations))) => {
            assert!(violations.contains("welcomeChannelId"));
        }
        other => panic!("expected schema violation, got {:?}", other.err()),
    }
}

/// Tests the full pipeline: apply a valid payload, read it back as form values.
///
/// Expected: Ok, and `get` returns the normalized form of the payload
#[tokio::test]
async fn applies_and_reads_back() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildChannels)
        .with_table(entity::prelude::GuildRoles)
        .with_table(entity::prelude::GuildModerationSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let body = serde_json::to_vec(&valid_payload()).unwrap();

    let service = GuildSettingsService::new(db);
    service.apply(42, &body).await.unwrap();

    let settings = service.get(42).await.unwrap();
    assert_eq!(settings.welcome_channel_id, "100");
    assert_eq!(settings.raids_td2_channel_id, "104");
    // Null and empty optionals come back as empty strings
    assert_eq!(settings.activities_td2_channel_id, "");
    assert_eq!(settings.incursion_channel_id, "");
    assert_eq!(settings.max_warns_mute_minutes, Some(60));
    assert_eq!(settings.max_warns_ban_days, None);
    assert!(settings.automod_enabled);
    assert!(settings.block_links);
}

/// Tests that an unconfigured guild reads back as a fully-defaulted form.
///
/// Expected: Ok with empty ids, blank thresholds and flags off
#[tokio::test]
async fn reads_defaults_for_unconfigured_guild() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildChannels)
        .with_table(entity::prelude::GuildRoles)
        .with_table(entity::prelude::GuildModerationSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildSettingsService::new(db);
    let settings = service.get(7).await.unwrap();

    assert_eq!(settings.welcome_channel_id, "");
    assert_eq!(settings.mute_role_id, "");
    assert_eq!(settings.warn_decay_days, None);
    assert!(!settings.automod_enabled);
    assert!(!settings.block_invites);
    assert!(!settings.block_links);
}
