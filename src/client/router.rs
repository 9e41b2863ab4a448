use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{
    guild::{GuildDashboard, GuildSettings},
    Home, Login, NotFound,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/login")]
    Login {},

    #[layout(RequiresLoggedIn)]
    #[route("/")]
    Home {},

    #[route("/guilds/:guild_id")]
    GuildDashboard { guild_id: u64 },

    #[route("/guilds/:guild_id/settings")]
    GuildSettings { guild_id: u64 },
    #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
