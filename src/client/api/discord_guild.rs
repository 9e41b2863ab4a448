use crate::{
    client::model::error::ApiError,
    model::discord::{GuildInfoDto, GuildOptionsDto, ManagedGuildDto},
};

use super::helper::{get, parse_response, send_request};

/// Get the guilds the logged-in user can administer
pub async fn get_managed_guilds() -> Result<Vec<ManagedGuildDto>, ApiError> {
    let response = send_request(get("/api/guilds")).await?;
    parse_response(response).await
}

/// Get live metadata for a guild
pub async fn get_guild_info(guild_id: u64) -> Result<GuildInfoDto, ApiError> {
    let url = format!("/api/guilds/{}", guild_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Get the channel and role catalogs for a guild's settings form
pub async fn get_guild_options(guild_id: u64) -> Result<GuildOptionsDto, ApiError> {
    let url = format!("/api/guilds/{}/options", guild_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
