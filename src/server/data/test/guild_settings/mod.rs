use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

use crate::server::{
    data::{
        guild_channels::GuildChannelsRepository, guild_roles::GuildRolesRepository,
        guild_settings::GuildSettingsStore,
    },
    model::guild_settings::ValidatedSettings,
};

mod load;
mod save;

/// Builds a test context with all three configuration tables.
async fn settings_context() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::GuildChannels)
        .with_table(entity::prelude::GuildRoles)
        .with_table(entity::prelude::GuildModerationSettings)
        .build()
        .await
        .unwrap()
}

/// The concrete configuration scenario exercised across the save tests:
/// required channels set, every optional unset, flags from boolean strings
/// already coerced.
fn minimal_settings() -> ValidatedSettings {
    ValidatedSettings {
        welcome_channel_id: "1".to_string(),
        goodbye_channel_id: "2".to_string(),
        log_channel_id: "3".to_string(),
        bot_announcements_channel_id: "4".to_string(),
        raids_td2_channel_id: String::new(),
        activities_td2_channel_id: String::new(),
        incursion_channel_id: String::new(),
        build_channel_id: String::new(),
        raid_manager_role_id: String::new(),
        mute_role_id: String::new(),
        max_warns_mute_minutes: None,
        max_warns_kick: None,
        max_warns_ban_days: None,
        warn_decay_days: None,
        automod_enabled: true,
        block_invites: false,
        block_links: false,
        caps_threshold: Some(70),
        mention_threshold: None,
    }
}

/// A fully-populated configuration, used to verify full-replace semantics.
fn full_settings() -> ValidatedSettings {
    ValidatedSettings {
        welcome_channel_id: "10".to_string(),
        goodbye_channel_id: "11".to_string(),
        log_channel_id: "12".to_string(),
        bot_announcements_channel_id: "13".to_string(),
        raids_td2_channel_id: "14".to_string(),
        activities_td2_channel_id: "15".to_string(),
        incursion_channel_id: "16".to_string(),
        build_channel_id: "17".to_string(),
        raid_manager_role_id: "20".to_string(),
        mute_role_id: "21".to_string(),
        max_warns_mute_minutes: Some(60),
        max_warns_kick: Some(3),
        max_warns_ban_days: Some(7),
        warn_decay_days: Some(30),
        automod_enabled: true,
        block_invites: true,
        block_links: true,
        caps_threshold: Some(80),
        mention_threshold: Some(5),
    }
}
