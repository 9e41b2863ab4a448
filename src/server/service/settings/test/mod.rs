use serde_json::json;

use crate::server::{
    error::{settings::SettingsError, AppError},
    service::settings::{schema, GuildSettingsService},
};

mod apply;
mod decode;

/// A complete, strictly-typed settings payload used as a baseline by the
/// decode tests. Individual tests override or remove fields from this value.
fn valid_payload() -> serde_json::Value {
    json!({
        "welcomeChannelId": "100",
        "goodbyeChannelId": "101",
        "logChannelId": "102",
        "botAnnouncementsChannelId": "103",
        "raidsTd2ChannelId": "104",
        "activitiesTd2ChannelId": null,
        "incursionChannelId": "",
        "buildChannelId": "107",
        "raidManagerRoleId": "200",
        "muteRoleId": "201",
        "maxWarnsMuteMinutes": 60,
        "maxWarnsKick": 3,
        "maxWarnsBanDays": null,
        "warnDecayDays": 30,
        "automodEnabled": true,
        "blockInvites": false,
        "blockLinks": true,
        "capsThreshold": 70,
        "mentionThreshold": 5
    })
}
