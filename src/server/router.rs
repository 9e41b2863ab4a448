use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{callback, get_user, login, logout},
        discord::{get_guild, get_guild_options, get_managed_guilds},
        settings::{get_guild_settings, save_guild_settings},
    },
    state::AppState,
};

/// OpenAPI documentation for the dashboard API.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::discord::get_managed_guilds,
        crate::server::controller::discord::get_guild,
        crate::server::controller::discord::get_guild_options,
        crate::server::controller::settings::get_guild_settings,
        crate::server::controller::settings::save_guild_settings,
    ),
    components(schemas(
        crate::model::api::AckDto,
        crate::model::api::ErrorDto,
        crate::model::api::ValidationErrorDto,
        crate::model::discord::ChannelOptionDto,
        crate::model::discord::GuildInfoDto,
        crate::model::discord::GuildOptionsDto,
        crate::model::discord::ManagedGuildDto,
        crate::model::discord::RoleOptionDto,
        crate::model::settings::GuildSettingsDto,
        crate::model::user::UserDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/guilds", get(get_managed_guilds))
        .route("/api/guilds/{guild_id}", get(get_guild))
        .route("/api/guilds/{guild_id}/options", get(get_guild_options))
        .route(
            "/api/guilds/{guild_id}/settings",
            get(get_guild_settings).post(save_guild_settings),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
