pub mod dashboard;
pub mod settings;

pub use dashboard::GuildDashboard;
pub use settings::GuildSettings;
