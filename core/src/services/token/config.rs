//! Configuration for the token service

use std::time::Duration;

use jsonwebtoken::Algorithm;
use tg_shared::config::AuthConfig;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for signing access tokens
    pub access_secret: String,
    /// Secret for signing refresh tokens
    pub refresh_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token lifetime in seconds
    pub access_token_expiry_seconds: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_expiry_seconds: i64,
    /// Upper bound for one session store call
    pub store_timeout: Duration,
}

impl TokenServiceConfig {
    /// Default lifetimes with the given secrets
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            algorithm: Algorithm::HS256,
            access_token_expiry_seconds: ACCESS_TOKEN_EXPIRY_MINUTES * 60,
            refresh_token_expiry_seconds: REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
            store_timeout: Duration::from_secs(3),
        }
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(auth: &AuthConfig) -> Self {
        Self {
            access_token_expiry_seconds: auth.access_token_expiry,
            refresh_token_expiry_seconds: auth.refresh_token_expiry,
            store_timeout: Duration::from_millis(auth.store_timeout_ms),
            ..Self::new(auth.access_secret.clone(), auth.refresh_secret.clone())
        }
    }
}
