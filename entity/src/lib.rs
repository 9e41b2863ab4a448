pub mod prelude;

pub mod guild_channels;
pub mod guild_moderation_settings;
pub mod guild_roles;
pub mod user;
pub mod user_guild;
