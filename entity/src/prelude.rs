pub use super::guild_channels::Entity as GuildChannels;
pub use super::guild_moderation_settings::Entity as GuildModerationSettings;
pub use super::guild_roles::Entity as GuildRoles;
pub use super::user::Entity as User;
pub use super::user_guild::Entity as UserGuild;
