#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod discord_guild;

#[cfg(feature = "web")]
pub mod settings;

#[cfg(feature = "web")]
pub mod user;

#[cfg(feature = "web")]
pub use discord_guild::{get_guild_info, get_guild_options, get_managed_guilds};

#[cfg(feature = "web")]
pub use settings::{get_guild_settings, save_guild_settings};
