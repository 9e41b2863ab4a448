//! Coercing decoder for the guild settings wire payload.
//!
//! The settings form reaches the server as loosely-typed JSON: numbers may
//! arrive as numeric strings and booleans as `"true"`/`"false"`, depending on
//! how the submitting form serialized its inputs. This module decodes such a
//! payload into a `ValidatedSettings` record or an exhaustive set of
//! per-field violations - every field is checked even after the first
//! failure, so one response can drive the whole form's error display.
//!
//! Coercion rules per field class:
//! - required id strings must be present, non-null and non-empty;
//! - optional id strings default to `""` when absent or null;
//! - threshold integers accept integral JSON numbers or base-10 numeric
//!   strings, must be >= 0, and stay `None` when absent or null;
//! - flags accept JSON booleans, the strings `"true"`/`"false"`, or 0/1.

use serde_json::{Map, Value};

use crate::server::model::guild_settings::{FieldViolations, ValidatedSettings};

/// Decodes a settings payload object into a validated configuration.
///
/// # Arguments
/// - `fields` - The payload's top-level JSON object
///
/// # Returns
/// - `Ok(ValidatedSettings)` - Fully-typed, fully-defaulted configuration
/// - `Err(FieldViolations)` - Every violated constraint, keyed by wire field
///   name
pub fn decode(fields: &Map<String, Value>) -> Result<ValidatedSettings, FieldViolations> {
    let mut violations = FieldViolations::default();

    let settings = ValidatedSettings {
        // Channels
        welcome_channel_id: required_id(fields, "welcomeChannelId", &mut violations),
        goodbye_channel_id: required_id(fields, "goodbyeChannelId", &mut violations),
        log_channel_id: required_id(fields, "logChannelId", &mut violations),
        bot_announcements_channel_id: required_id(
            fields,
            "botAnnouncementsChannelId",
            &mut violations,
        ),
        raids_td2_channel_id: optional_id(fields, "raidsTd2ChannelId", &mut violations),
        activities_td2_channel_id: optional_id(fields, "activitiesTd2ChannelId", &mut violations),
        incursion_channel_id: optional_id(fields, "incursionChannelId", &mut violations),
        build_channel_id: optional_id(fields, "buildChannelId", &mut violations),

        // Roles
        raid_manager_role_id: optional_id(fields, "raidManagerRoleId", &mut violations),

        // Moderation
        mute_role_id: optional_id(fields, "muteRoleId", &mut violations),
        max_warns_mute_minutes: optional_threshold(fields, "maxWarnsMuteMinutes", &mut violations),
        max_warns_kick: optional_threshold(fields, "maxWarnsKick", &mut violations),
        max_warns_ban_days: optional_threshold(fields, "maxWarnsBanDays", &mut violations),
        warn_decay_days: optional_threshold(fields, "warnDecayDays", &mut violations),
        automod_enabled: required_flag(fields, "automodEnabled", &mut violations),
        block_invites: required_flag(fields, "blockInvites", &mut violations),
        block_links: required_flag(fields, "blockLinks", &mut violations),
        caps_threshold: optional_threshold(fields, "capsThreshold", &mut violations),
        mention_threshold: optional_threshold(fields, "mentionThreshold", &mut violations),
    };

    if violations.is_empty() {
        Ok(settings)
    } else {
        Err(violations)
    }
}

/// Required non-empty id string. Returns `""` alongside a violation on failure.
fn required_id(fields: &Map<String, Value>, field: &str, violations: &mut FieldViolations) -> String {
    match fields.get(field) {
        None | Some(Value::Null) => {
            violations.push(field, "Required");
            String::new()
        }
        Some(Value::String(value)) if value.is_empty() => {
            violations.push(field, "Must not be empty");
            String::new()
        }
        Some(Value::String(value)) => value.clone(),
        Some(_) => {
            violations.push(field, "Expected a string");
            String::new()
        }
    }
}

/// Optional id string. Absent and null both default to `""`.
fn optional_id(fields: &Map<String, Value>, field: &str, violations: &mut FieldViolations) -> String {
    match fields.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(value)) => value.clone(),
        Some(_) => {
            violations.push(field, "Expected a string");
            String::new()
        }
    }
}

/// Optional non-negative integer, accepted as a number or a numeric string.
/// Absent and null both stay `None`.
fn optional_threshold(
    fields: &Map<String, Value>,
    field: &str,
    violations: &mut FieldViolations,
) -> Option<i32> {
    match fields.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Number(number)) => match number.as_i64() {
            Some(value) => check_threshold_range(value, field, violations),
            None => {
                violations.push(field, "Expected an integer");
                None
            }
        },
        Some(Value::String(value)) => match value.trim().parse::<i64>() {
            Ok(parsed) => check_threshold_range(parsed, field, violations),
            Err(_) => {
                violations.push(field, "Expected a number");
                None
            }
        },
        Some(_) => {
            violations.push(field, "Expected a number");
            None
        }
    }
}

fn check_threshold_range(
    value: i64,
    field: &str,
    violations: &mut FieldViolations,
) -> Option<i32> {
    if value < 0 {
        violations.push(field, "Must be greater than or equal to 0");
        return None;
    }

    match i32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            violations.push(field, "Value is too large");
            None
        }
    }
}

/// Required boolean flag, accepted as a JSON boolean, `"true"`/`"false"`, or
/// 0/1. Returns `false` alongside a violation on failure.
fn required_flag(fields: &Map<String, Value>, field: &str, violations: &mut FieldViolations) -> bool {
    match fields.get(field) {
        None | Some(Value::Null) => {
            violations.push(field, "Required");
            false
        }
        Some(Value::Bool(value)) => *value,
        Some(Value::String(value)) => match value.as_str() {
            "true" => true,
            "false" => false,
            _ => {
                violations.push(field, "Expected a boolean");
                false
            }
        },
        Some(Value::Number(number)) => match number.as_i64() {
            Some(0) => false,
            Some(1) => true,
            _ => {
                violations.push(field, "Expected a boolean");
                false
            }
        },
        Some(_) => {
            violations.push(field, "Expected a boolean");
            false
        }
    }
}
