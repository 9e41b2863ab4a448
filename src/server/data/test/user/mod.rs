use test_utils::builder::TestBuilder;

use crate::server::{data::user::UserRepository, model::user::UpsertUserParam};

mod find_by_discord_id;
mod upsert;
