use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::discord::ManagedGuildDto,
};

#[cfg(feature = "web")]
use crate::client::api::get_managed_guilds;

#[component]
pub fn Home() -> Element {
    let mut guilds = use_signal(|| None::<Vec<ManagedGuildDto>>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_managed_guilds);

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(guild_list) => {
                        guilds.set(Some(guild_list.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        guilds.set(None);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });
    }

    rsx! {
        Title { "Select a server | {SITE_NAME}" }
        if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else if let Some(guild_list) = guilds() {
            Page {
                class: "flex flex-col items-center",
                div {
                    class: "w-full max-w-3xl",
                    h1 {
                        class: "text-lg sm:text-2xl mb-2",
                        "Select a server"
                    }
                    p {
                        class: "text-white/75 mb-6",
                        "Pick the server you want to configure. Only servers you can manage are listed."
                    }
                    if guild_list.is_empty() {
                        p {
                            class: "text-white/75",
                            "No manageable servers found. Make sure the bot is in your server and you have the Manage Server permission."
                        }
                    }
                    div {
                        class: "flex flex-col gap-2",
                        for guild in guild_list {
                            GuildCard { guild: guild.clone() }
                        }
                    }
                }
            }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn GuildCard(guild: ManagedGuildDto) -> Element {
    let guild_id = guild.guild_id.parse::<u64>().unwrap_or_default();

    rsx! {
        Link {
            to: Route::GuildDashboard { guild_id },
            div {
                class: "flex items-center gap-4 p-4 bg-base-200 rounded-lg hover:bg-base-300",
                if let Some(icon_url) = guild.icon_url() {
                    img {
                        class: "w-12 h-12 rounded-full",
                        src: "{icon_url}",
                    }
                } else {
                    div {
                        class: "w-12 h-12 rounded-full bg-base-300 flex items-center justify-center",
                        p {
                            class: "text-xl",
                            {guild.name.chars().next().unwrap_or('?').to_string()}
                        }
                    }
                }
                p {
                    class: "text-lg",
                    "{guild.name}"
                }
            }
        }
    }
}
