//! Authentication session state.
//!
//! [`Session`] holds the bearer credential and the signed-in user, with the
//! credential mirrored to durable storage under the `token` key so a
//! restart stays signed in. Like the appearance keys, storage failures are
//! logged and non-fatal.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::persist::{keys, SettingsStore};
use crate::routing::AuthState;

/// Account role, as the API reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// The signed-in account, as returned by `/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub is_active: bool,
}

/// Authentication state for one client session.
pub struct Session<S> {
    store: S,
    token: Option<String>,
    user: Option<User>,
}

impl<S: SettingsStore> Session<S> {
    /// Creates a session, hydrating any persisted credential.
    pub fn new(store: S) -> Self {
        let token = store.get(keys::TOKEN);
        Self {
            store,
            token,
            user: None,
        }
    }

    /// True while a bearer credential is held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Stores a fresh credential, persisting it for the next start.
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
        if let Err(err) = self.store.set(keys::TOKEN, token) {
            warn!("failed to persist credential: {err}");
        }
    }

    /// Drops the credential, in memory and in storage.
    pub fn clear_token(&mut self) {
        self.token = None;
        if let Err(err) = self.store.remove(keys::TOKEN) {
            warn!("failed to clear persisted credential: {err}");
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Forgets the user and the credential.
    pub fn logout(&mut self) {
        self.user = None;
        self.clear_token();
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self.user,
            Some(User {
                role: Role::Admin,
                ..
            })
        )
    }
}

impl<S: SettingsStore> AuthState for Session<S> {
    fn is_authenticated(&self) -> bool {
        Session::is_authenticated(self)
    }

    fn is_admin(&self) -> bool {
        Session::is_admin(self)
    }
}
