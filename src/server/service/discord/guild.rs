use serenity::all::GuildId;
use serenity::http::Http;
use serenity::model::guild::PremiumTier;

use crate::{model::discord::GuildInfoDto, server::error::AppError};

pub struct DiscordGuildService<'a> {
    discord_http: &'a Http,
}

impl<'a> DiscordGuildService<'a> {
    pub fn new(discord_http: &'a Http) -> Self {
        Self { discord_http }
    }

    /// Fetches live guild metadata for the overview page.
    ///
    /// Uses the with-counts variant so the approximate member and presence
    /// numbers Discord maintains are included.
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(GuildInfoDto)`: Current guild metadata
    /// - `Err(AppError)`: Discord API error (unknown guild, bot missing, outage)
    pub async fn get_with_counts(&self, guild_id: u64) -> Result<GuildInfoDto, AppError> {
        let guild = self
            .discord_http
            .get_guild_with_counts(GuildId::new(guild_id))
            .await?;

        Ok(GuildInfoDto {
            guild_id: guild.id.get().to_string(),
            name: guild.name.clone(),
            icon_hash: guild.icon.as_ref().map(|hash| hash.to_string()),
            banner_hash: guild.banner.as_ref().map(|hash| hash.to_string()),
            premium_tier: premium_tier_level(guild.premium_tier),
            premium_subscription_count: guild.premium_subscription_count.unwrap_or(0),
            approximate_member_count: guild.approximate_member_count.unwrap_or(0),
            approximate_presence_count: guild.approximate_presence_count.unwrap_or(0),
        })
    }
}

fn premium_tier_level(tier: PremiumTier) -> u8 {
    match tier {
        PremiumTier::Tier1 => 1,
        PremiumTier::Tier2 => 2,
        PremiumTier::Tier3 => 3,
        _ => 0,
    }
}
