mod guild_settings;
mod user;
mod user_guild;
