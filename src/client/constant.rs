pub const SITE_NAME: &str = "Guildboard";
