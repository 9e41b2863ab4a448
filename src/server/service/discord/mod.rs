//! Read-only Discord directory lookups backing the dashboard pages.

pub mod guild;
pub mod options;

pub use guild::DiscordGuildService;
pub use options::GuildOptionsService;
