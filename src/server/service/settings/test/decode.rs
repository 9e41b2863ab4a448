use super::*;
use serde_json::json;

fn decode(value: &serde_json::Value) -> Result<
    crate::server::model::guild_settings::ValidatedSettings,
    crate::server::model::guild_settings::FieldViolations,
> {
    schema::decode(value.as_object().expect("payload must be an object"))
}

/// Tests decoding a well-formed payload with strict JSON types.
///
/// Verifies required channels pass through, null and empty optionals default
/// to empty strings, and thresholds/flags keep their values.
///
/// Expected: Ok with the fully-defaulted record
#[test]
fn decodes_strictly_typed_payload() {
    let payload = valid_payload();

    let settings = decode(&payload).unwrap();

    assert_eq!(settings.welcome_channel_id, "100");
    assert_eq!(settings.bot_announcements_channel_id, "103");
    assert_eq!(settings.raids_td2_channel_id, "104");
    assert_eq!(settings.activities_td2_channel_id, "");
    assert_eq!(settings.incursion_channel_id, "");
    assert_eq!(settings.raid_manager_role_id, "200");
    assert_eq!(settings.max_warns_mute_minutes, Some(60));
    assert_eq!(settings.max_warns_ban_days, None);
    assert!(settings.automod_enabled);
    assert!(!settings.block_invites);
    assert_eq!(settings.caps_threshold, Some(70));
}

/// Tests coercion of numeric strings and boolean strings.
///
/// Form submissions serialize numbers and flags as strings; the decoder must
/// accept `"70"` for a threshold and `"true"`/`"false"` for flags.
///
/// Expected: Ok with coerced values
#[test]
fn coerces_numeric_and_boolean_strings() {
    let mut payload = valid_payload();
    payload["capsThreshold"] = json!("70");
    payload["maxWarnsKick"] = json!("3");
    payload["automodEnabled"] = json!("true");
    payload["blockInvites"] = json!("false");
    payload["blockLinks"] = json!(0);

    let settings = decode(&payload).unwrap();

    assert_eq!(settings.caps_threshold, Some(70));
    assert_eq!(settings.max_warns_kick, Some(3));
    assert!(settings.automod_enabled);
    assert!(!settings.block_invites);
    assert!(!settings.block_links);
}

/// Tests that absent optional fields default rather than fail.
///
/// Optional ids default to empty strings and optional thresholds stay None
/// when their keys are missing entirely.
///
/// Expected: Ok with defaults
#[test]
fn defaults_absent_optional_fields() {
    let payload = json!({
        "welcomeChannelId": "1",
        "goodbyeChannelId": "2",
        "logChannelId": "3",
        "botAnnouncementsChannelId": "4",
        "automodEnabled": true,
        "blockInvites": false,
        "blockLinks": false
    });

    let settings = decode(&payload).unwrap();

    assert_eq!(settings.raids_td2_channel_id, "");
    assert_eq!(settings.activities_td2_channel_id, "");
    assert_eq!(settings.incursion_channel_id, "");
    assert_eq!(settings.build_channel_id, "");
    assert_eq!(settings.raid_manager_role_id, "");
    assert_eq!(settings.mute_role_id, "");
    assert_eq!(settings.max_warns_mute_minutes, None);
    assert_eq!(settings.max_warns_kick, None);
    assert_eq!(settings.max_warns_ban_days, None);
    assert_eq!(settings.warn_decay_days, None);
    assert_eq!(settings.caps_threshold, None);
    assert_eq!(settings.mention_threshold, None);
}

/// Tests that a missing required channel is reported under its field name.
///
/// Expected: Err whose violation map contains `welcomeChannelId`
#[test]
fn missing_required_channel_is_reported() {
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("welcomeChannelId");

    let violations = decode(&payload).unwrap_err();

    assert!(violations.contains("welcomeChannelId"));
    assert!(violations.into_map()["welcomeChannelId"].contains(&"Required".to_string()));
}

/// Tests that an empty required channel is a violation distinct from absence.
///
/// Expected: Err naming the field
#[test]
fn empty_required_channel_is_reported() {
    let mut payload = valid_payload();
    payload["logChannelId"] = json!("");

    let violations = decode(&payload).unwrap_err();

    assert!(violations.contains("logChannelId"));
}

/// Tests that negative thresholds are rejected naming the field.
///
/// Both raw numbers and numeric strings must hit the same bound check.
///
/// Expected: Err naming each negative field
#[test]
fn negative_thresholds_are_reported() {
    let mut payload = valid_payload();
    payload["maxWarnsKick"] = json!(-1);
    payload["capsThreshold"] = json!("-5");

    let violations = decode(&payload).unwrap_err();

    assert!(violations.contains("maxWarnsKick"));
    assert!(violations.contains("capsThreshold"));
}

/// Tests that non-integer threshold input is rejected.
///
/// Expected: Err naming the field
#[test]
fn fractional_threshold_is_reported() {
    let mut payload = valid_payload();
    payload["mentionThreshold"] = json!(2.5);

    let violations = decode(&payload).unwrap_err();

    assert!(violations.contains("mentionThreshold"));
}

/// Tests that unparseable boolean input is rejected.
///
/// Expected: Err naming the field
#[test]
fn unparseable_flag_is_reported() {
    let mut payload = valid_payload();
    payload["blockLinks"] = json!("yes");

    let violations = decode(&payload).unwrap_err();

    assert!(violations.contains("blockLinks"));
}

/// Tests that validation is exhaustive rather than fail-fast.
///
/// Three independent violations in one payload must all surface in a single
/// decode result.
///
/// Expected: Err containing all three fields
#[test]
fn collects_all_violations() {
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("goodbyeChannelId");
    payload["warnDecayDays"] = json!(-3);
    payload["automodEnabled"] = json!("maybe");

    let violations = decode(&payload).unwrap_err();

    assert!(violations.contains("goodbyeChannelId"));
    assert!(violations.contains("warnDecayDays"));
    assert!(violations.contains("automodEnabled"));
}

/// Tests that wrong-typed required channels are rejected, not coerced.
///
/// Expected: Err naming the field
#[test]
fn non_string_required_channel_is_reported() {
    let mut payload = valid_payload();
    payload["welcomeChannelId"] = json!(12345);

    let violations = decode(&payload).unwrap_err();

    assert!(violations.contains("welcomeChannelId"));
}
