use serde::{Deserialize, Serialize};
use validator::Validate;

use tg_core::domain::entities::token::TokenDetails;
use tg_core::domain::entities::user::Credential;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 128))]
    pub username: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

impl From<LoginRequest> for Credential {
    fn from(request: LoginRequest) -> Self {
        Credential::new(request.username, request.password)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    // A missing field reads as an empty token and is rejected as unauthorized
    #[serde(default)]
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

/// Token pair returned by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenDetails> for TokenResponse {
    fn from(details: TokenDetails) -> Self {
        Self {
            access_token: details.access_token,
            refresh_token: details.refresh_token,
        }
    }
}

/// Body returned by a successful logout
pub const LOGOUT_MESSAGE: &str = "Successfully logged out";
