//! Manageable-guild data repository.
//!
//! Tracks which guilds each logged-in user may administer. The list is
//! captured from Discord during login and replaced wholesale on every login,
//! so rows here are only ever as stale as the user's last session.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::{
    error::AppError,
    model::guild::{ManagedGuild, SyncGuildParam},
};

/// Repository providing database operations for users' manageable guilds.
pub struct UserGuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserGuildRepository<'a> {
    /// Creates a new UserGuildRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserGuildRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces all guild rows for a user with the provided list.
    ///
    /// Deletes the user's existing rows first, then inserts the new ones, so
    /// guilds the user lost access to since their last login disappear.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `guilds` - Guilds the user may currently administer
    ///
    /// # Returns
    /// - `Ok(())` - Replacement completed
    /// - `Err(DbErr)` - Database error during deletion or insert
    pub async fn replace_for_user(
        &self,
        user_id: u64,
        guilds: &[SyncGuildParam],
    ) -> Result<(), DbErr> {
        let user_id_str = user_id.to_string();

        entity::prelude::UserGuild::delete_many()
            .filter(entity::user_guild::Column::UserId.eq(user_id_str.as_str()))
            .exec(self.db)
            .await?;

        let models = guilds
            .iter()
            .map(|guild| entity::user_guild::ActiveModel {
                user_id: ActiveValue::Set(user_id_str.clone()),
                guild_id: ActiveValue::Set(guild.guild_id.to_string()),
                guild_name: ActiveValue::Set(guild.name.clone()),
                icon_hash: ActiveValue::Set(guild.icon_hash.clone()),
            })
            .collect::<Vec<_>>();

        entity::prelude::UserGuild::insert_many(models)
            .on_empty_do_nothing()
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets all guilds a user may administer.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(Vec<ManagedGuild>)` - Guilds from the user's last sync
    /// - `Err(AppError)` - Database error during query or corrupt stored id
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<ManagedGuild>, AppError> {
        let entities = entity::prelude::UserGuild::find()
            .filter(entity::user_guild::Column::UserId.eq(user_id.to_string()))
            .all(self.db)
            .await?;

        entities.into_iter().map(ManagedGuild::from_entity).collect()
    }

    /// Checks whether a user may administer a specific guild.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(true)` - A row exists for this user and guild
    /// - `Ok(false)` - The user has no access to this guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn has_guild(&self, user_id: u64, guild_id: u64) -> Result<bool, DbErr> {
        let count = entity::prelude::UserGuild::find()
            .filter(entity::user_guild::Column::UserId.eq(user_id.to_string()))
            .filter(entity::user_guild::Column::GuildId.eq(guild_id.to_string()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
