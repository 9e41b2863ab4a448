use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{AckDto, ErrorDto, ValidationErrorDto},
        settings::GuildSettingsDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::settings::GuildSettingsService,
        state::AppState,
    },
};

/// Tag for grouping settings endpoints in OpenAPI documentation
pub static SETTINGS_TAG: &str = "settings";

/// Get the stored configuration for a guild.
///
/// Returns the saved channel bindings, role bindings and moderation settings
/// flattened into initial form values. Guilds that were never saved return a
/// fully-defaulted form.
///
/// # Access Control
/// - Logged-in session with administration rights over the guild
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `guild_id` - Discord guild ID to fetch settings for
///
/// # Returns
/// - `200 OK` - Current form values
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User cannot administer this guild
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/settings",
    tag = SETTINGS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved guild settings", body = GuildSettingsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot administer this guild", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .require_guild_access(guild_id)
        .await?;

    let settings_service = GuildSettingsService::new(&state.db);
    let settings = settings_service.get(access.guild_id).await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// Save the configuration for a guild.
///
/// Validates the submitted payload against the settings schema (coercing
/// numeric strings and boolean strings, collecting every violation) and
/// atomically replaces the guild's channel bindings, role bindings and
/// moderation settings. The body is taken as raw bytes so malformed JSON and
/// schema violations produce distinct, controlled error responses.
///
/// # Access Control
/// - Logged-in session with administration rights over the guild
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `guild_id` - Discord guild ID the settings belong to
/// - `body` - Raw JSON request body
///
/// # Returns
/// - `200 OK` - All three records committed
/// - `400 Bad Request` - Malformed body, or schema violations with a
///   field-level detail map
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User cannot administer this guild
/// - `500 Internal Server Error` - Transaction failed and was rolled back
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/settings",
    tag = SETTINGS_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = GuildSettingsDto,
    responses(
        (status = 200, description = "Settings saved", body = AckDto),
        (status = 400, description = "Malformed body or schema violations", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User cannot administer this guild", body = ErrorDto),
        (status = 500, description = "Failed to save settings", body = ErrorDto)
    ),
)]
pub async fn save_guild_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let access = AuthGuard::new(&state.db, &session)
        .require_guild_access(guild_id)
        .await?;

    let settings_service = GuildSettingsService::new(&state.db);
    settings_service.apply(access.guild_id, &body).await?;

    Ok((StatusCode::OK, Json(AckDto { ok: true })))
}
