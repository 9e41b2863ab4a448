//! Guild settings validation-and-persistence pipeline.
//!
//! The pipeline is a stateless, request-scoped transformation: decode the raw
//! payload against the settings schema (collecting every field violation),
//! then persist the validated configuration across the three per-guild
//! records inside one transaction. Validation failures and persistence
//! failures stay distinct all the way to the HTTP response so the form can
//! tell "fix your input" apart from "try again later".

pub mod schema;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::{
    model::settings::GuildSettingsDto,
    server::{
        data::guild_settings::GuildSettingsStore,
        error::{settings::SettingsError, AppError},
    },
};

pub struct GuildSettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates a raw settings payload and atomically persists it.
    ///
    /// The caller must already have established that the acting user may
    /// administer `guild_id`; no authorization happens here.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the settings belong to
    /// - `raw_body` - Unparsed request body bytes
    ///
    /// # Returns
    /// - `Ok(())` - All three records committed
    /// - `Err(SettingsError::MalformedInput)` - Body is not a JSON object
    /// - `Err(SettingsError::SchemaViolation)` - One or more fields invalid,
    ///   with the full violation map
    /// - `Err(SettingsError::TransactionFailed)` - Store failure, rolled back
    pub async fn apply(&self, guild_id: u64, raw_body: &[u8]) -> Result<(), AppError> {
        let payload: serde_json::Value =
            serde_json::from_slice(raw_body).map_err(|_| SettingsError::MalformedInput)?;

        let Some(fields) = payload.as_object() else {
            return Err(SettingsError::MalformedInput.into());
        };

        let settings = schema::decode(fields).map_err(SettingsError::SchemaViolation)?;

        let store = GuildSettingsStore::new(self.db);
        store
            .save(&guild_id.to_string(), &settings)
            .await
            .map_err(SettingsError::TransactionFailed)?;

        Ok(())
    }

    /// Loads the stored configuration as initial form values.
    ///
    /// Guilds that have never been saved produce a fully-defaulted form
    /// (empty selects, blank thresholds, flags off).
    ///
    /// # Arguments
    /// - `guild_id` - Guild to load the settings for
    ///
    /// # Returns
    /// - `Ok(GuildSettingsDto)` - Complete form value set
    /// - `Err(AppError)` - Database error during the reads
    pub async fn get(&self, guild_id: u64) -> Result<GuildSettingsDto, AppError> {
        let store = GuildSettingsStore::new(self.db);
        let configuration = store.load(&guild_id.to_string()).await?;

        Ok(configuration.into_form_dto())
    }
}
