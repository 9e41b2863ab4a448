use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id stored in the session.
    ///
    /// The request reached a protected endpoint without a login having taken
    /// place (or after the session expired). Results in a 401 Unauthorized
    /// response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// Session references a user that no longer exists in the database.
    ///
    /// Indicates a stale session surviving a user row deletion. Results in a
    /// 404 Not Found response.
    #[error("User {0} found in session but not in database")]
    UserNotInDatabase(u64),

    /// Authenticated user has no administration rights over the guild.
    ///
    /// The user's synchronized guild list contains no entry for the requested
    /// guild. Results in a 403 Forbidden response.
    #[error("User {user_id} has no access to guild {guild_id}")]
    GuildAccessDenied {
        /// Discord id of the acting user
        user_id: u64,
        /// Guild the user attempted to administer
        guild_id: u64,
    },

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Authorization code could not be exchanged for an access token.
    ///
    /// Discord rejected the token exchange (expired or reused code, bad client
    /// credentials). Results in a 400 Bad Request response with a generic
    /// message.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchangeFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly
/// error messages. Full details are logged at debug level for diagnostics while
/// client-facing messages stay generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For CSRF and token exchange failures
/// - 401 Unauthorized - For requests without a logged-in session
/// - 403 Forbidden - For guild access denials
/// - 404 Not Found - For missing users
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response(),
            Self::GuildAccessDenied { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You don't have permission to manage this server.".to_string(),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed | Self::TokenExchangeFailed(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
