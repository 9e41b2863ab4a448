use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::model::guild_settings::FieldViolations,
};

/// Errors produced by the guild settings save pipeline.
///
/// The three variants keep the caller's two recovery paths distinct: the first
/// two mean the payload must be corrected before retrying, the last means the
/// identical request may be retried once the store recovers.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Request body could not be decoded as a JSON object at all.
    ///
    /// No partial processing happens; results in a 400 Bad Request with a
    /// flat message.
    #[error("Request body is not a valid JSON object")]
    MalformedInput,

    /// Payload decoded but one or more fields violate the settings schema.
    ///
    /// Violations are collected exhaustively rather than fail-fast so the
    /// form can surface every problem at once. Results in a 400 Bad Request
    /// carrying the field -> violations detail map.
    #[error("Guild settings payload failed validation")]
    SchemaViolation(FieldViolations),

    /// The settings transaction did not commit.
    ///
    /// All three upserts were rolled back; no partial configuration is
    /// observable. Safe to retry the identical request. Results in a
    /// 500 Internal Server Error with a flat message.
    #[error("Failed to save guild settings: {0}")]
    TransactionFailed(#[source] sea_orm::DbErr),
}

/// Converts settings pipeline errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Malformed body (flat message) or schema violation
///   (message plus per-field details)
/// - 500 Internal Server Error - Transaction failure, details logged server-side
impl IntoResponse for SettingsError {
    fn into_response(self) -> Response {
        match self {
            Self::MalformedInput => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Request body is not a valid JSON object".to_string(),
                }),
            )
                .into_response(),
            Self::SchemaViolation(violations) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    error: "Validation error".to_string(),
                    details: violations.into_map(),
                }),
            )
                .into_response(),
            Self::TransactionFailed(err) => {
                tracing::error!("Guild settings transaction failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Failed to save settings, please try again later.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
