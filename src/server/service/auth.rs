//! Discord OAuth2 authentication service.
//!
//! Drives the authorization-code flow: building the login URL, exchanging the
//! callback code for an access token, fetching the user's identity and
//! manageable guilds with that token, and persisting both. Guild membership
//! is filtered to guilds the user can actually administer (owner or
//! MANAGE_GUILD) before it is stored, so the rest of the application can
//! treat a `user_guild` row as an authorization grant.

use dioxus_logger::tracing;
use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serenity::all::Permissions;
use url::Url;

use crate::server::{
    data::{user::UserRepository, user_guild::UserGuildRepository},
    error::{auth::AuthError, AppError},
    model::{
        guild::SyncGuildParam,
        user::{UpsertUserParam, User},
    },
    state::OAuth2Client,
    util::parse::parse_u64_from_string,
};

type DiscordToken = StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>;

/// Identity payload returned by `GET /users/@me`.
#[derive(Deserialize)]
struct DiscordIdentity {
    id: String,
    username: String,
    global_name: Option<String>,
    avatar: Option<String>,
}

/// One entry of the `GET /users/@me/guilds` listing.
#[derive(Deserialize)]
struct DiscordUserGuild {
    id: String,
    name: String,
    icon: Option<String>,
    #[serde(default)]
    owner: bool,
    /// Permission bit set, serialized by Discord as a decimal string.
    #[serde(default)]
    permissions: String,
}

impl DiscordUserGuild {
    /// Whether the user can administer this guild's bot configuration.
    fn is_manageable(&self) -> bool {
        if self.owner {
            return true;
        }

        self.permissions
            .parse::<u64>()
            .map(|bits| bits & Permissions::MANAGE_GUILD.bits() != 0)
            .unwrap_or(false)
    }
}

pub struct DiscordAuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Builds the Discord authorization URL and a fresh CSRF token.
    ///
    /// The token must be stored in the session and checked during the
    /// callback before the authorization code is exchanged.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(oauth2::Scope::new("identify".to_string()))
            .add_scope(oauth2::Scope::new("guilds".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Completes the OAuth flow for a validated callback.
    ///
    /// Exchanges the authorization code, fetches the user's identity and
    /// guild list from Discord, upserts the user record and replaces their
    /// manageable-guild rows.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the Discord callback query string
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user, persisted and synced
    /// - `Err(AppError)` - Token exchange, Discord API or database failure
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let identity = self.fetch_discord_identity(&token).await?;
        let guilds = self.fetch_manageable_guilds(&token).await?;

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .upsert(UpsertUserParam {
                discord_id: parse_u64_from_string(identity.id)?,
                name: identity.global_name.unwrap_or(identity.username),
                avatar_hash: identity.avatar,
            })
            .await?;

        let user_guild_repo = UserGuildRepository::new(self.db);
        user_guild_repo
            .replace_for_user(user.discord_id, &guilds)
            .await?;

        tracing::info!(
            "Synced {} manageable guilds for user {}",
            guilds.len(),
            user.discord_id
        );

        Ok(user)
    }

    /// Retrieves the Discord identity behind an access token.
    async fn fetch_discord_identity(&self, token: &DiscordToken) -> Result<DiscordIdentity, AppError> {
        let access_token = token.access_token().secret();

        let identity = self
            .http_client
            .get("https://discord.com/api/users/@me")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordIdentity>()
            .await?;

        Ok(identity)
    }

    /// Retrieves the guilds the token's user can administer.
    ///
    /// Fetches the full guild list from Discord and keeps only entries where
    /// the user is owner or holds MANAGE_GUILD.
    async fn fetch_manageable_guilds(
        &self,
        token: &DiscordToken,
    ) -> Result<Vec<SyncGuildParam>, AppError> {
        let access_token = token.access_token().secret();

        let entries = self
            .http_client
            .get("https://discord.com/api/users/@me/guilds")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<Vec<DiscordUserGuild>>()
            .await?;

        let mut guilds = Vec::new();
        for entry in entries.into_iter().filter(DiscordUserGuild::is_manageable) {
            guilds.push(SyncGuildParam {
                guild_id: parse_u64_from_string(entry.id)?,
                name: entry.name,
                icon_hash: entry.icon,
            });
        }

        Ok(guilds)
    }
}
