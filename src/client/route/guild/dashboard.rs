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
    model::discord::GuildInfoDto,
};

#[cfg(feature = "web")]
use crate::client::api::get_guild_info;

#[component]
pub fn GuildDashboard(guild_id: u64) -> Element {
    let mut guild = use_signal(|| None::<GuildInfoDto>);
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || get_guild_info(guild_id));

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok(info) => {
                        guild.set(Some(info.clone()));
                        error.set(None);
                    }
                    Err(err) => {
                        guild.set(None);
                        error.set(Some(err.clone()));
                    }
                }
            }
        });
    }

    rsx! {
        Title { "Server overview | {SITE_NAME}" }
        if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else if let Some(info) = guild() {
            Page {
                class: "flex flex-col items-center",
                div {
                    class: "w-full max-w-4xl",
                    div {
                        class: "flex items-center gap-4 mb-8",
                        if let Some(icon_url) = info.icon_url() {
                            img {
                                class: "w-16 h-16 rounded-full",
                                src: "{icon_url}",
                            }
                        }
                        div {
                            h1 {
                                class: "text-2xl font-bold",
                                "{info.name}"
                            }
                            p {
                                class: "text-white/75",
                                "Boost tier {info.premium_tier}"
                            }
                        }
                    }
                    div {
                        class: "grid grid-cols-2 md:grid-cols-4 gap-4 mb-8",
                        StatCard { label: "Members", value: info.approximate_member_count }
                        StatCard { label: "Online", value: info.approximate_presence_count }
                        StatCard { label: "Boosts", value: info.premium_subscription_count }
                        StatCard { label: "Boost tier", value: info.premium_tier as u64 }
                    }
                    Link {
                        to: Route::GuildSettings { guild_id },
                        class: "btn btn-outline",
                        "Server settings"
                    }
                }
            }
        } else {
            LoadingPage {}
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: u64) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-1 p-4 bg-base-200 rounded-lg",
            p {
                class: "text-sm text-white/75",
                "{label}"
            }
            p {
                class: "text-2xl font-bold",
                "{value}"
            }
        }
    }
}
