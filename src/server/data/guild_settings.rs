//! Atomic unit of work for a guild's full configuration.
//!
//! A guild configuration spans three records (channel bindings, role
//! bindings, moderation settings) that must never be observable in a
//! half-written state. `GuildSettingsStore` makes the transaction boundary
//! explicit: begin, run the three upserts, then commit or roll back as one
//! call. Reads go straight to the pooled connection since a point-in-time
//! view across the three records is enough for rendering the form.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use crate::server::{
    data::{
        guild_channels::GuildChannelsRepository, guild_moderation::GuildModerationRepository,
        guild_roles::GuildRolesRepository,
    },
    model::guild_settings::{GuildConfiguration, ValidatedSettings},
};

/// Store coordinating the three per-guild configuration records.
pub struct GuildSettingsStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsStore<'a> {
    /// Creates a new GuildSettingsStore instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildSettingsStore` - New store instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Atomically saves a validated configuration for a guild.
    ///
    /// All three records are upserted inside one transaction. If any upsert
    /// fails the transaction is rolled back and none of the records change;
    /// the caller may retry the identical call since the operation is
    /// idempotent. Each record is a full replace, so optional values absent
    /// from `settings` clear whatever was stored before.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the configuration belongs to
    /// - `settings` - Validated configuration to persist
    ///
    /// # Returns
    /// - `Ok(())` - All three records committed
    /// - `Err(DbErr)` - Transaction failed and was rolled back
    pub async fn save(&self, guild_id: &str, settings: &ValidatedSettings) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        match Self::upsert_all(&txn, guild_id, settings).await {
            Ok(()) => txn.commit().await,
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    /// Runs the three upserts against an open transaction.
    async fn upsert_all(
        txn: &DatabaseTransaction,
        guild_id: &str,
        settings: &ValidatedSettings,
    ) -> Result<(), DbErr> {
        GuildChannelsRepository::new(txn)
            .upsert(guild_id, settings.channel_bindings())
            .await?;

        GuildRolesRepository::new(txn)
            .upsert(guild_id, settings.role_bindings())
            .await?;

        GuildModerationRepository::new(txn)
            .upsert(guild_id, settings.moderation())
            .await?;

        Ok(())
    }

    /// Loads whatever configuration records exist for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to load the configuration for
    ///
    /// # Returns
    /// - `Ok(GuildConfiguration)` - Per-record options, `None` where a guild
    ///   has not been configured yet
    /// - `Err(DbErr)` - Database error during one of the queries
    pub async fn load(&self, guild_id: &str) -> Result<GuildConfiguration, DbErr> {
        let channels = GuildChannelsRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?;
        let roles = GuildRolesRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?;
        let moderation = GuildModerationRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?;

        Ok(GuildConfiguration {
            channels,
            roles,
            moderation,
        })
    }
}
