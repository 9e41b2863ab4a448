use super::*;
use test_utils::factory;

/// Tests the guard with no user in the session.
///
/// Expected: Err(AuthErr(UserNotInSession))
#[tokio::test]
async fn require_user_fails_without_session() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests the guard with a session pointing at a deleted user.
///
/// Expected: Err(AuthErr(UserNotInDatabase))
#[tokio::test]
async fn require_user_fails_for_stale_session() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(777).await.unwrap();

    let result = AuthGuard::new(db, session).require_user().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(777)))
    ));
}

/// Tests the guard with a logged-in, stored user.
///
/// Expected: Ok with the session user's record
#[tokio::test]
async fn require_user_returns_session_user() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .discord_id("555")
        .name("Operator")
        .build()
        .await
        .unwrap();

    AuthSession::new(session).set_user_id(555).await.unwrap();

    let resolved = AuthGuard::new(db, session).require_user().await.unwrap();

    assert_eq!(resolved.discord_id, 555);
    assert_eq!(resolved.name, user.name);
}

/// Tests guild access for a user without a matching guild row.
///
/// Expected: Err(AuthErr(GuildAccessDenied))
#[tokio::test]
async fn require_guild_access_denies_non_member() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserGuild)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("555")
        .build()
        .await
        .unwrap();
    AuthSession::new(session).set_user_id(555).await.unwrap();

    let result = AuthGuard::new(db, session).require_guild_access(42).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::GuildAccessDenied {
            user_id: 555,
            guild_id: 42
        }))
    ));
}

/// Tests guild access for a user whose synced guild list contains the guild.
///
/// Expected: Ok with the resolved access context
#[tokio::test]
async fn require_guild_access_allows_member() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserGuild)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("555")
        .build()
        .await
        .unwrap();
    factory::create_user_guild(db, "555", "42").await.unwrap();
    AuthSession::new(session).set_user_id(555).await.unwrap();

    let access = AuthGuard::new(db, session)
        .require_guild_access(42)
        .await
        .unwrap();

    assert_eq!(access.user.discord_id, 555);
    assert_eq!(access.guild_id, 42);
}
