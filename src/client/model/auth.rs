use dioxus::prelude::*;

use crate::{client::model::error::ApiError, model::user::UserDto};

/// Resolution state of the session user fetched on first load.
#[derive(Clone, Default, PartialEq)]
pub enum AuthState {
    /// Fetch has not completed yet.
    #[default]
    Initializing,
    /// A logged-in user was returned.
    Authenticated(UserDto),
    /// The server answered with no session user.
    NotLoggedIn,
    /// The fetch itself failed.
    Error(String),
}

impl AuthState {
    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// True once the initial fetch has produced an answer either way.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    /// Maps the `/api/auth/user` fetch result onto an auth state.
    ///
    /// 401 and 404 both mean "nobody is logged in" (no session, or a stale
    /// session for a removed user); anything else failing is an error.
    pub fn from_fetch(result: Result<UserDto, ApiError>) -> Self {
        match result {
            Ok(user) => AuthState::Authenticated(user),
            Err(err) if err.status == 401 || err.status == 404 => AuthState::NotLoggedIn,
            Err(err) => AuthState::Error(err.message),
        }
    }
}

/// Shared handle to the session user's auth state.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }
}
