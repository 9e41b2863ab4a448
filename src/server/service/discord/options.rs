use serenity::all::{ChannelType, GuildId};
use serenity::http::Http;

use crate::{
    model::discord::{ChannelOptionDto, GuildOptionsDto, RoleOptionDto},
    server::error::AppError,
};

/// Channel kinds an operator can bind settings to.
///
/// Matches what the bot can post into: regular text, announcement and forum
/// channels. Voice, category and thread containers are excluded.
const SELECTABLE_CHANNEL_KINDS: [ChannelType; 3] =
    [ChannelType::Text, ChannelType::News, ChannelType::Forum];

pub struct GuildOptionsService<'a> {
    discord_http: &'a Http,
}

impl<'a> GuildOptionsService<'a> {
    pub fn new(discord_http: &'a Http) -> Self {
        Self { discord_http }
    }

    /// Fetches the channel and role catalogs for the settings form.
    ///
    /// Channels are filtered to text-like kinds and sorted by their position
    /// in the guild; roles are sorted highest first, matching how Discord's
    /// own UI presents them.
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(GuildOptionsDto)`: Channel and role options ready for rendering
    /// - `Err(AppError)`: Discord API error during either listing
    pub async fn get_options(&self, guild_id: u64) -> Result<GuildOptionsDto, AppError> {
        let guild_id = GuildId::new(guild_id);

        let mut channels = self
            .discord_http
            .get_channels(guild_id)
            .await?
            .into_iter()
            .filter(|channel| SELECTABLE_CHANNEL_KINDS.contains(&channel.kind))
            .collect::<Vec<_>>();
        channels.sort_by_key(|channel| channel.position);

        let mut roles = self.discord_http.get_guild_roles(guild_id).await?;
        roles.sort_by(|a, b| b.position.cmp(&a.position));

        Ok(GuildOptionsDto {
            channels: channels
                .into_iter()
                .map(|channel| ChannelOptionDto {
                    id: channel.id.get().to_string(),
                    name: format!("#{}", channel.name),
                })
                .collect(),
            roles: roles
                .into_iter()
                .map(|role| RoleOptionDto {
                    id: role.id.get().to_string(),
                    name: role.name,
                })
                .collect(),
        })
    }
}
