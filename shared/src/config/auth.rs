//! Authentication configuration: token secrets, lifetimes and the reference identity

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or, ConfigError};

const DEV_ACCESS_SECRET: &str = "development-access-secret-change-me";
const DEV_REFRESH_SECRET: &str = "development-refresh-secret-change-me";

/// Reference identity checked at login
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReferenceUser {
    /// Numeric user identifier embedded in tokens
    pub id: u64,
    /// Login name
    pub username: String,
    /// Plain password compared at login
    pub password: String,
}

impl Default for ReferenceUser {
    fn default() -> Self {
        Self {
            id: 1,
            username: String::from("username"),
            password: String::from("password"),
        }
    }
}

/// Token and session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret for signing access tokens
    pub access_secret: String,

    /// Secret for signing refresh tokens
    pub refresh_secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Refresh token lifetime in seconds
    pub refresh_token_expiry: i64,

    /// Upper bound for a single session store call, in milliseconds
    pub store_timeout_ms: u64,

    /// Whether logout also deletes the paired refresh session
    pub logout_revokes_refresh: bool,

    /// The identity accepted by the login endpoint
    #[serde(default)]
    pub reference_user: ReferenceUser,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from(DEV_ACCESS_SECRET),
            refresh_secret: String::from(DEV_REFRESH_SECRET),
            access_token_expiry: 900,     // 15 minutes
            refresh_token_expiry: 604800, // 7 days
            store_timeout_ms: 3000,
            logout_revokes_refresh: true,
            reference_user: ReferenceUser::default(),
        }
    }
}

impl AuthConfig {
    /// Create a configuration with explicit secrets and default lifetimes
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let defaults_user = ReferenceUser::default();

        Self {
            access_secret: env_or("ACCESS_SECRET", DEV_ACCESS_SECRET),
            refresh_secret: env_or("REFRESH_SECRET", DEV_REFRESH_SECRET),
            access_token_expiry: env_parse_or("ACCESS_TOKEN_EXPIRY", defaults.access_token_expiry),
            refresh_token_expiry: env_parse_or(
                "REFRESH_TOKEN_EXPIRY",
                defaults.refresh_token_expiry,
            ),
            store_timeout_ms: env_parse_or("SESSION_STORE_TIMEOUT_MS", defaults.store_timeout_ms),
            logout_revokes_refresh: env_parse_or(
                "LOGOUT_REVOKES_REFRESH",
                defaults.logout_revokes_refresh,
            ),
            reference_user: ReferenceUser {
                id: env_parse_or("AUTH_USER_ID", defaults_user.id),
                username: env_or("AUTH_USERNAME", &defaults_user.username),
                password: env_or("AUTH_PASSWORD", &defaults_user.password),
            },
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }

    /// Check if either secret is still the built-in development value
    pub fn is_using_default_secrets(&self) -> bool {
        self.access_secret == DEV_ACCESS_SECRET || self.refresh_secret == DEV_REFRESH_SECRET
    }

    /// Reject configurations the token service cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_secret.is_empty() {
            return Err(ConfigError::Missing("ACCESS_SECRET"));
        }
        if self.refresh_secret.is_empty() {
            return Err(ConfigError::Missing("REFRESH_SECRET"));
        }
        if self.access_secret == self.refresh_secret {
            return Err(ConfigError::Invalid {
                key: "REFRESH_SECRET",
                reason: String::from("must differ from ACCESS_SECRET"),
            });
        }
        if self.access_token_expiry <= 0 || self.refresh_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "ACCESS_TOKEN_EXPIRY",
                reason: String::from("token lifetimes must be positive"),
            });
        }
        if self.store_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_STORE_TIMEOUT_MS",
                reason: String::from("timeout must be positive"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetimes() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_expiry, 15 * 60);
        assert_eq!(config.refresh_token_expiry, 7 * 24 * 60 * 60);
        assert!(config.is_using_default_secrets());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_shared_secret() {
        let config = AuthConfig::new("same", "same");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { key: "REFRESH_SECRET", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        let config = AuthConfig::new("", "refresh");
        assert!(matches!(config.validate(), Err(ConfigError::Missing("ACCESS_SECRET"))));
    }

    #[test]
    fn test_expiry_builders() {
        let config = AuthConfig::new("a", "r")
            .with_access_expiry_minutes(5)
            .with_refresh_expiry_days(1);
        assert_eq!(config.access_token_expiry, 300);
        assert_eq!(config.refresh_token_expiry, 86400);
        assert!(!config.is_using_default_secrets());
    }
}
