//! User and credential entities.

use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// Username/password pair presented at login. Never persisted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// A known user
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub username: String,
    password: String,
}

impl User {
    pub fn new(id: u64, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Compares a presented credential against this user in constant time
    pub fn matches(&self, credential: &Credential) -> bool {
        let name_ok = constant_time_eq(self.username.as_bytes(), credential.username.as_bytes());
        let password_ok =
            constant_time_eq(self.password.as_bytes(), credential.password.as_bytes());
        name_ok & password_ok
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
