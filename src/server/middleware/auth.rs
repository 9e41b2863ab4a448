use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{user::UserRepository, user_guild::UserGuildRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Per-request authorization context resolved from the session.
///
/// Produced once at the top of a guild-scoped handler and passed on
/// explicitly; handlers and services never read authentication state from
/// anywhere else.
pub struct GuildAccess {
    /// The authenticated user acting on the guild.
    pub user: User,
    /// Guild the user is authorized to administer.
    pub guild_id: u64,
}

/// Resolves the acting user (and their guild rights) from session plus database.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in user.
    ///
    /// Reads the user id from the session and loads the matching user record.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::UserNotInSession)` - No login in this session
    /// - `Err(AuthError::UserNotInDatabase)` - Stale session for a deleted user
    pub async fn require_user(&self) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_discord_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Requires a logged-in user with administration rights over a guild.
    ///
    /// A user has access when their synchronized guild list (captured at
    /// login from Discord, filtered to MANAGE_GUILD) contains the guild.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the request wants to act on
    ///
    /// # Returns
    /// - `Ok(GuildAccess)` - Resolved authorization context for the request
    /// - `Err(AuthError::GuildAccessDenied)` - User cannot manage this guild
    pub async fn require_guild_access(&self, guild_id: u64) -> Result<GuildAccess, AppError> {
        let user = self.require_user().await?;

        let user_guild_repo = UserGuildRepository::new(self.db);
        if !user_guild_repo.has_guild(user.discord_id, guild_id).await? {
            return Err(AuthError::GuildAccessDenied {
                user_id: user.discord_id,
                guild_id,
            }
            .into());
        }

        Ok(GuildAccess { user, guild_id })
    }
}
