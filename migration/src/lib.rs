pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_user_guild_table;
mod m20260106_000003_create_guild_channels_table;
mod m20260106_000004_create_guild_roles_table;
mod m20260106_000005_create_guild_moderation_settings_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_user_guild_table::Migration),
            Box::new(m20260106_000003_create_guild_channels_table::Migration),
            Box::new(m20260106_000004_create_guild_roles_table::Migration),
            Box::new(m20260106_000005_create_guild_moderation_settings_table::Migration),
        ]
    }
}
