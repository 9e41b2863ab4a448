//! Factory for users' manageable-guild rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a manageable-guild row for a user with a generated guild name.
pub async fn create_user_guild(
    db: &DatabaseConnection,
    user_id: &str,
    guild_id: &str,
) -> Result<entity::user_guild::Model, DbErr> {
    entity::user_guild::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        guild_id: ActiveValue::Set(guild_id.to_string()),
        guild_name: ActiveValue::Set(format!("Guild {}", next_id())),
        icon_hash: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
