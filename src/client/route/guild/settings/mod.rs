//! Guild settings form page.
//!
//! Fetches the stored configuration and the guild's live channel/role
//! catalogs, renders the three form sections, and submits the whole form as
//! one save. Validation failures come back as a per-field detail map and are
//! rendered inline; persistence failures get a distinct retry banner.

mod form_fields;

use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::{discord::GuildOptionsDto, settings::GuildSettingsDto},
};

use form_fields::{ChannelSelect, RoleSelect, ThresholdInput, ToggleField};

#[cfg(feature = "web")]
use crate::client::api::{
    get_guild_options, get_guild_settings, save_guild_settings, settings::SaveSettingsError,
};

/// Outcome banner shown above the form after a save attempt.
#[derive(Clone, PartialEq)]
enum SaveBanner {
    Saved,
    Validation(String),
    Failed(String),
}

#[component]
pub fn GuildSettings(guild_id: u64) -> Element {
    let mut form = use_signal(GuildSettingsDto::default);
    let mut options = use_signal(|| None::<GuildOptionsDto>);
    let mut load_error = use_signal(|| None::<ApiError>);
    let mut field_errors = use_signal(BTreeMap::<String, Vec<String>>::new);
    let mut banner = use_signal(|| None::<SaveBanner>);
    let mut saving = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let settings = get_guild_settings(guild_id).await?;
            let catalog = get_guild_options(guild_id).await?;
            Ok::<(GuildSettingsDto, GuildOptionsDto), ApiError>((settings, catalog))
        });

        use_effect(move || {
            if let Some(result) = future.read_unchecked().as_ref() {
                match result {
                    Ok((settings, catalog)) => {
                        form.set(settings.clone());
                        options.set(Some(catalog.clone()));
                        load_error.set(None);
                    }
                    Err(err) => {
                        options.set(None);
                        load_error.set(Some(err.clone()));
                    }
                }
            }
        });
    }

    let on_save = move |_| {
        #[cfg(feature = "web")]
        {
            let payload = form();
            saving.set(true);
            banner.set(None);

            spawn(async move {
                match save_guild_settings(guild_id, &payload).await {
                    Ok(()) => {
                        field_errors.set(BTreeMap::new());
                        banner.set(Some(SaveBanner::Saved));
                    }
                    Err(SaveSettingsError::Validation { message, details }) => {
                        field_errors.set(details);
                        banner.set(Some(SaveBanner::Validation(message)));
                    }
                    Err(SaveSettingsError::Api(err)) => {
                        banner.set(Some(SaveBanner::Failed(err.message)));
                    }
                }
                saving.set(false);
            });
        }
    };

    let errors_for = move |field: &str| field_errors().get(field).cloned().unwrap_or_default();

    rsx! {
        Title { "Server settings | {SITE_NAME}" }
        if let Some(err) = load_error() {
            ErrorPage { status: err.status, message: err.message }
        } else if let Some(catalog) = options() {
            Page {
                class: "flex flex-col items-center",
                div {
                    class: "w-full max-w-4xl",
                    div {
                        class: "mb-6",
                        h1 {
                            class: "text-2xl font-bold",
                            "Server settings"
                        }
                        p {
                            class: "text-white/75",
                            "Configure channels, roles and moderation options. The feature channels are optional."
                        }
                    }

                    match banner() {
                        Some(SaveBanner::Saved) => rsx! {
                            div {
                                class: "alert alert-success mb-4",
                                "Settings saved."
                            }
                        },
                        Some(SaveBanner::Validation(message)) => rsx! {
                            div {
                                class: "alert alert-warning mb-4",
                                "{message}. Fix the highlighted fields and save again."
                            }
                        },
                        Some(SaveBanner::Failed(message)) => rsx! {
                            div {
                                class: "alert alert-error mb-4",
                                "{message}. Your input is fine, try saving again in a moment."
                            }
                        },
                        None => rsx! {},
                    }

                    div {
                        class: "flex flex-col gap-8",

                        // Channels
                        section {
                            h2 {
                                class: "text-xl mb-4",
                                "Channels"
                            }
                            div {
                                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                                ChannelSelect {
                                    label: "Welcome channel",
                                    value: form().welcome_channel_id,
                                    options: catalog.channels.clone(),
                                    required: true,
                                    errors: errors_for("welcomeChannelId"),
                                    on_change: move |value| form.write().welcome_channel_id = value,
                                }
                                ChannelSelect {
                                    label: "Goodbye channel",
                                    value: form().goodbye_channel_id,
                                    options: catalog.channels.clone(),
                                    required: true,
                                    errors: errors_for("goodbyeChannelId"),
                                    on_change: move |value| form.write().goodbye_channel_id = value,
                                }
                                ChannelSelect {
                                    label: "Log channel",
                                    value: form().log_channel_id,
                                    options: catalog.channels.clone(),
                                    required: true,
                                    errors: errors_for("logChannelId"),
                                    on_change: move |value| form.write().log_channel_id = value,
                                }
                                ChannelSelect {
                                    label: "Bot announcements channel",
                                    value: form().bot_announcements_channel_id,
                                    options: catalog.channels.clone(),
                                    required: true,
                                    errors: errors_for("botAnnouncementsChannelId"),
                                    on_change: move |value| form.write().bot_announcements_channel_id = value,
                                }
                                ChannelSelect {
                                    label: "Raids channel (The Division 2)",
                                    value: form().raids_td2_channel_id,
                                    options: catalog.channels.clone(),
                                    errors: errors_for("raidsTd2ChannelId"),
                                    on_change: move |value| form.write().raids_td2_channel_id = value,
                                }
                                ChannelSelect {
                                    label: "Activities channel (The Division 2)",
                                    value: form().activities_td2_channel_id,
                                    options: catalog.channels.clone(),
                                    errors: errors_for("activitiesTd2ChannelId"),
                                    on_change: move |value| form.write().activities_td2_channel_id = value,
                                }
                                ChannelSelect {
                                    label: "Incursion channel",
                                    value: form().incursion_channel_id,
                                    options: catalog.channels.clone(),
                                    errors: errors_for("incursionChannelId"),
                                    on_change: move |value| form.write().incursion_channel_id = value,
                                }
                                ChannelSelect {
                                    label: "Build channel",
                                    value: form().build_channel_id,
                                    options: catalog.channels.clone(),
                                    errors: errors_for("buildChannelId"),
                                    on_change: move |value| form.write().build_channel_id = value,
                                }
                            }
                        }

                        // Roles
                        section {
                            h2 {
                                class: "text-xl mb-4",
                                "Roles"
                            }
                            div {
                                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                                RoleSelect {
                                    label: "Raid manager role",
                                    value: form().raid_manager_role_id,
                                    options: catalog.roles.clone(),
                                    errors: errors_for("raidManagerRoleId"),
                                    on_change: move |value| form.write().raid_manager_role_id = value,
                                }
                            }
                        }

                        // Moderation
                        section {
                            h2 {
                                class: "text-xl mb-4",
                                "Moderation"
                            }
                            div {
                                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                                RoleSelect {
                                    label: "Mute role",
                                    value: form().mute_role_id,
                                    options: catalog.roles.clone(),
                                    errors: errors_for("muteRoleId"),
                                    on_change: move |value| form.write().mute_role_id = value,
                                }
                                ThresholdInput {
                                    label: "Mute duration at max warns (minutes)",
                                    value: form().max_warns_mute_minutes,
                                    errors: errors_for("maxWarnsMuteMinutes"),
                                    on_change: move |value| form.write().max_warns_mute_minutes = value,
                                }
                                ThresholdInput {
                                    label: "Warns before kick",
                                    value: form().max_warns_kick,
                                    errors: errors_for("maxWarnsKick"),
                                    on_change: move |value| form.write().max_warns_kick = value,
                                }
                                ThresholdInput {
                                    label: "Ban duration at max warns (days)",
                                    value: form().max_warns_ban_days,
                                    errors: errors_for("maxWarnsBanDays"),
                                    on_change: move |value| form.write().max_warns_ban_days = value,
                                }
                                ThresholdInput {
                                    label: "Warn decay (days)",
                                    value: form().warn_decay_days,
                                    errors: errors_for("warnDecayDays"),
                                    on_change: move |value| form.write().warn_decay_days = value,
                                }
                                ThresholdInput {
                                    label: "Caps threshold (%)",
                                    value: form().caps_threshold,
                                    errors: errors_for("capsThreshold"),
                                    on_change: move |value| form.write().caps_threshold = value,
                                }
                                ThresholdInput {
                                    label: "Mention threshold",
                                    value: form().mention_threshold,
                                    errors: errors_for("mentionThreshold"),
                                    on_change: move |value| form.write().mention_threshold = value,
                                }
                            }
                            div {
                                class: "flex flex-col gap-2 mt-4",
                                ToggleField {
                                    label: "Enable automod",
                                    value: form().automod_enabled,
                                    errors: errors_for("automodEnabled"),
                                    on_change: move |value| form.write().automod_enabled = value,
                                }
                                ToggleField {
                                    label: "Block server invites",
                                    value: form().block_invites,
                                    errors: errors_for("blockInvites"),
                                    on_change: move |value| form.write().block_invites = value,
                                }
                                ToggleField {
                                    label: "Block links",
                                    value: form().block_links,
                                    errors: errors_for("blockLinks"),
                                    on_change: move |value| form.write().block_links = value,
                                }
                            }
                        }

                        div {
                            button {
                                class: "btn btn-primary",
                                disabled: saving(),
                                onclick: on_save,
                                if saving() {
                                    span { class: "loading loading-spinner loading-sm" }
                                }
                                "Save settings"
                            }
                        }
                    }
                }
            }
        } else {
            LoadingPage {}
        }
    }
}
