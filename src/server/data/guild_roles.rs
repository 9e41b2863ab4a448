//! Role bindings data repository.
//!
//! Manages the `guild_roles` record mapping configuration roles to Discord
//! role ids. One record per guild, keyed by the guild id.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::guild_settings::{GuildRoleConfig, UpsertGuildRolesParam};

/// Repository providing database operations for role bindings.
pub struct GuildRolesRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> GuildRolesRepository<'a, C> {
    /// Creates a new GuildRolesRepository instance.
    ///
    /// # Arguments
    /// - `conn` - Database connection or open transaction
    ///
    /// # Returns
    /// - `GuildRolesRepository` - New repository instance
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Gets the role bindings for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID as a string slice
    ///
    /// # Returns
    /// - `Ok(Some(GuildRoleConfig))` - Bindings found for the guild
    /// - `Ok(None)` - No bindings stored for this guild yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(&self, guild_id: &str) -> Result<Option<GuildRoleConfig>, DbErr> {
        let entity = entity::prelude::GuildRoles::find()
            .filter(entity::guild_roles::Column::GuildId.eq(guild_id))
            .one(self.conn)
            .await?;

        Ok(entity.map(GuildRoleConfig::from_entity))
    }

    /// Creates or fully replaces the role bindings for a guild.
    ///
    /// `created_at` is preserved on update and `updated_at` refreshed.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID the bindings belong to
    /// - `param` - Full replacement values for the record
    ///
    /// # Returns
    /// - `Ok(GuildRoleConfig)` - The created or updated bindings
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        guild_id: &str,
        param: UpsertGuildRolesParam,
    ) -> Result<GuildRoleConfig, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::GuildRoles::insert(entity::guild_roles::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            raid_manager_role_id: ActiveValue::Set(param.raid_manager_role_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::guild_roles::Column::GuildId)
                .update_columns([
                    entity::guild_roles::Column::RaidManagerRoleId,
                    entity::guild_roles::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.conn)
        .await?;

        Ok(GuildRoleConfig::from_entity(entity))
    }
}
