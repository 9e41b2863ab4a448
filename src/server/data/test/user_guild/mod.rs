use test_utils::builder::TestBuilder;

use crate::server::{data::user_guild::UserGuildRepository, model::guild::SyncGuildParam};

mod has_guild;
mod replace_for_user;

fn guild(guild_id: u64, name: &str) -> SyncGuildParam {
    SyncGuildParam {
        guild_id,
        name: name.to_string(),
        icon_hash: None,
    }
}
