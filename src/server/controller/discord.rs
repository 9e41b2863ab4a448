use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        discord::{GuildInfoDto, GuildOptionsDto, ManagedGuildDto},
    },
    server::{
        data::user_guild::UserGuildRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        service::discord::{DiscordGuildService, GuildOptionsService},
        state::AppState,
    },
};

/// Tag for grouping guild endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// Get the guilds the logged-in user can administer.
///
/// Returns the manageable-guild list captured from Discord during the user's
/// last login, used to render the guild picker.
///
/// # Access Control
/// - Logged-in session required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - Manageable guilds for the user
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds",
    tag = GUILD_TAG,
    responses(
        (status = 200, description = "Successfully retrieved manageable guilds", body = Vec<ManagedGuildDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_managed_guilds(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    let guilds = UserGuildRepository::new(&state.db)
        .get_by_user(user.discord_id)
        .await?
        .into_iter()
        .map(|guild| guild.into_dto())
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(guilds)))
}

/// Get live metadata for a guild.
///
/// Fetches the guild from the Discord API with approximate member and
/// presence counts for the overview page.
///
/// # Access Control
/// - Logged-in session with administration rights over the guild
///
/// # Arguments
/// - `state` - Application state containing the Discord HTTP client
/// - `session` - User's session for authentication
/// - `guild_id` - Discord guild ID to fetch
///
/// # Returns
/// - `200 OK` - Current guild metadata
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User cannot administer this guild
/// - `500 Internal Server Error` - Discord API error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guild metadata", body = GuildInfoDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot administer this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .require_guild_access(guild_id)
        .await?;

    let guild_service = DiscordGuildService::new(&state.discord_http);
    let guild = guild_service.get_with_counts(access.guild_id).await?;

    Ok((StatusCode::OK, Json(guild)))
}

/// Get the channel and role catalogs for a guild.
///
/// Fetches the guild's current channels (filtered to text-like kinds) and
/// roles from the Discord API to populate the settings form selects.
///
/// # Access Control
/// - Logged-in session with administration rights over the guild
///
/// # Arguments
/// - `state` - Application state containing the Discord HTTP client
/// - `session` - User's session for authentication
/// - `guild_id` - Discord guild ID to fetch catalogs for
///
/// # Returns
/// - `200 OK` - Channel and role options
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User cannot administer this guild
/// - `500 Internal Server Error` - Discord API error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/options",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guild catalogs", body = GuildOptionsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot administer this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_options(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .require_guild_access(guild_id)
        .await?;

    let options_service = GuildOptionsService::new(&state.discord_http);
    let options = options_service.get_options(access.guild_id).await?;

    Ok((StatusCode::OK, Json(options)))
}
