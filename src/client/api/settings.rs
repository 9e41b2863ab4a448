use std::collections::BTreeMap;

use crate::{
    client::model::error::ApiError,
    model::{api::ValidationErrorDto, settings::GuildSettingsDto},
};

use super::helper::{get, parse_response, post, send_request, serialize_json};

/// Failure modes of a settings save, kept apart so the form can render
/// per-field messages for validation and a retry banner for everything else.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveSettingsError {
    /// The server rejected the payload; `details` maps wire field names to
    /// their violation messages.
    Validation {
        message: String,
        details: BTreeMap<String, Vec<String>>,
    },
    /// Transport failure or server-side error; safe to retry.
    Api(ApiError),
}

/// Get the stored settings for a guild as initial form values
pub async fn get_guild_settings(guild_id: u64) -> Result<GuildSettingsDto, ApiError> {
    let url = format!("/api/guilds/{}/settings", guild_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Save the settings form for a guild
pub async fn save_guild_settings(
    guild_id: u64,
    payload: &GuildSettingsDto,
) -> Result<(), SaveSettingsError> {
    let url = format!("/api/guilds/{}/settings", guild_id);
    let body = serialize_json(payload).map_err(SaveSettingsError::Api)?;

    let response = send_request(post(&url).body(body))
        .await
        .map_err(SaveSettingsError::Api)?;

    let status = response.status() as u64;
    if (200..300).contains(&status) {
        return Ok(());
    }

    // 400s carry the validation detail map when the schema rejected fields
    if status == 400 {
        if let Ok(validation) = response.json::<ValidationErrorDto>().await {
            if !validation.details.is_empty() {
                return Err(SaveSettingsError::Validation {
                    message: validation.error,
                    details: validation.details,
                });
            }
            return Err(SaveSettingsError::Api(ApiError {
                status,
                message: validation.error,
            }));
        }
    }

    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    Err(SaveSettingsError::Api(ApiError { status, message }))
}
