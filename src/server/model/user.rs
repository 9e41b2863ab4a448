//! User domain models and parameters.
//!
//! Provides domain models for dashboard operators with Discord identity and sync
//! metadata. Includes parameter types for user creation and updates during
//! authentication.

use chrono::{DateTime, Utc};

use crate::{
    model::user::UserDto,
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// Dashboard operator with Discord identity and sync metadata.
///
/// Tracks the user's Discord ID, display name, avatar and when their
/// manageable-guild list was last synchronized from Discord.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
    /// Avatar image hash, if the user has one set.
    pub avatar_hash: Option<String>,
    /// Last time the user's manageable guilds were synchronized.
    pub last_guild_sync_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            discord_id: self.discord_id,
            name: self.name,
            avatar_hash: self.avatar_hash,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Failed to convert stored user
    ///   Discord ID from String to u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            name: entity.name,
            avatar_hash: entity.avatar_hash,
            last_guild_sync_at: entity.last_guild_sync_at,
        })
    }
}

/// Parameters for upserting a user during authentication.
///
/// Every successful login refreshes the stored name and avatar and stamps the
/// guild sync time.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
    /// Avatar image hash, if the user has one set.
    pub avatar_hash: Option<String>,
}
