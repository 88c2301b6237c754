//! Configuration for the authentication service

use tg_shared::config::AuthConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Whether logout also deletes the paired refresh session
    pub logout_revokes_refresh: bool,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            logout_revokes_refresh: true,
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(auth: &AuthConfig) -> Self {
        Self {
            logout_revokes_refresh: auth.logout_revokes_refresh,
        }
    }
}
