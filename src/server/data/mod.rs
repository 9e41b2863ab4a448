//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! The per-guild configuration repositories are generic over SeaORM's
//! `ConnectionTrait` so the same upsert code runs against the pooled
//! connection and inside the `GuildSettingsStore` transaction.

pub mod guild_channels;
pub mod guild_moderation;
pub mod guild_roles;
pub mod guild_settings;
pub mod user;
pub mod user_guild;

#[cfg(test)]
mod test;
