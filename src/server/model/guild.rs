//! Domain models for the user's manageable-guild list.

use crate::{
    model::discord::ManagedGuildDto,
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// Guild a user may administer, captured from Discord at login.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagedGuild {
    /// Discord ID of the guild.
    pub guild_id: u64,
    /// Guild name at the time of the last sync.
    pub name: String,
    /// Guild icon hash at the time of the last sync.
    pub icon_hash: Option<String>,
}

impl ManagedGuild {
    /// Converts the domain model to a DTO for the guild picker.
    pub fn into_dto(self) -> ManagedGuildDto {
        ManagedGuildDto {
            guild_id: self.guild_id.to_string(),
            name: self.name,
            icon_hash: self.icon_hash,
        }
    }

    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ManagedGuild)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored guild ID was not
    ///   a valid u64
    pub fn from_entity(entity: entity::user_guild::Model) -> Result<Self, AppError> {
        let guild_id = parse_u64_from_string(entity.guild_id)?;

        Ok(Self {
            guild_id,
            name: entity.guild_name,
            icon_hash: entity.icon_hash,
        })
    }
}

/// Parameters for one guild row when replacing a user's guild list.
#[derive(Debug, Clone)]
pub struct SyncGuildParam {
    /// Discord ID of the guild.
    pub guild_id: u64,
    /// Current guild name.
    pub name: String,
    /// Current guild icon hash.
    pub icon_hash: Option<String>,
}
