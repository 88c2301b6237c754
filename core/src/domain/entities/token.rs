//! Token entities for the access/refresh session pair.

use serde::{Deserialize, Serialize};

use crate::errors::TokenError;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Claims carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Always `true` for tokens minted by this service
    pub authorized: bool,

    /// Session store key of this access token
    pub access_uuid: String,

    /// Session store key of the refresh token minted alongside
    pub refresh_uuid: String,

    /// Owner of the session
    pub user_id: u64,

    /// Expiration timestamp
    pub exp: i64,
}

impl AccessClaims {
    pub fn new(user_id: u64, access_uuid: &str, refresh_uuid: &str, exp: i64) -> Self {
        Self {
            authorized: true,
            access_uuid: access_uuid.to_string(),
            refresh_uuid: refresh_uuid.to_string(),
            user_id,
            exp,
        }
    }

    /// Checks the parts of the claim set serde cannot express
    pub fn validate(&self) -> Result<(), TokenError> {
        if !self.authorized {
            return Err(TokenError::NotAuthorized);
        }
        if self.access_uuid.is_empty() {
            return Err(TokenError::MissingClaim {
                claim: "access_uuid".to_string(),
            });
        }
        if self.refresh_uuid.is_empty() {
            return Err(TokenError::MissingClaim {
                claim: "refresh_uuid".to_string(),
            });
        }
        Ok(())
    }
}

/// Claims carried by a refresh token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Session store key of this refresh token
    pub refresh_uuid: String,

    /// Owner of the session
    pub user_id: u64,

    /// Expiration timestamp
    pub exp: i64,
}

impl RefreshClaims {
    pub fn new(user_id: u64, refresh_uuid: &str, exp: i64) -> Self {
        Self {
            refresh_uuid: refresh_uuid.to_string(),
            user_id,
            exp,
        }
    }

    pub fn validate(&self) -> Result<(), TokenError> {
        if self.refresh_uuid.is_empty() {
            return Err(TokenError::MissingClaim {
                claim: "refresh_uuid".to_string(),
            });
        }
        Ok(())
    }
}

/// Result of a successful issuance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDetails {
    pub access_token: String,
    pub refresh_token: String,
    pub access_session_id: String,
    pub refresh_session_id: String,
    /// Unix timestamp
    pub access_expires_at: i64,
    /// Unix timestamp
    pub refresh_expires_at: i64,
}

/// Identity derived from a verified access token. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDetails {
    pub session_id: String,
    pub refresh_session_id: String,
    pub user_id: u64,
}

impl From<AccessClaims> for AccessDetails {
    fn from(claims: AccessClaims) -> Self {
        Self {
            session_id: claims.access_uuid,
            refresh_session_id: claims.refresh_uuid,
            user_id: claims.user_id,
        }
    }
}

/// Identity derived from a verified refresh token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshDetails {
    pub session_id: String,
    pub user_id: u64,
}

impl From<RefreshClaims> for RefreshDetails {
    fn from(claims: RefreshClaims) -> Self {
        Self {
            session_id: claims.refresh_uuid,
            user_id: claims.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims_wire_names() {
        let claims = AccessClaims::new(7, "a-id", "r-id", 1_700_000_000);
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["authorized"], true);
        assert_eq!(json["access_uuid"], "a-id");
        assert_eq!(json["refresh_uuid"], "r-id");
        assert_eq!(json["user_id"], 7);
        assert_eq!(json["exp"], 1_700_000_000i64);
    }

    #[test]
    fn test_access_claims_reject_unauthorized() {
        let mut claims = AccessClaims::new(1, "a", "r", 0);
        claims.authorized = false;
        assert_eq!(claims.validate(), Err(TokenError::NotAuthorized));
    }

    #[test]
    fn test_empty_session_ids_are_missing_claims() {
        let claims = AccessClaims::new(1, "", "r", 0);
        assert!(matches!(claims.validate(), Err(TokenError::MissingClaim { .. })));

        let claims = RefreshClaims::new(1, "", 0);
        assert!(matches!(claims.validate(), Err(TokenError::MissingClaim { .. })));
    }

    #[test]
    fn test_user_id_must_be_unsigned() {
        let json = r#"{"authorized":true,"access_uuid":"a","refresh_uuid":"r","user_id":-3,"exp":1}"#;
        assert!(serde_json::from_str::<AccessClaims>(json).is_err());

        let json = r#"{"refresh_uuid":"r","user_id":"12","exp":1}"#;
        assert!(serde_json::from_str::<RefreshClaims>(json).is_err());
    }

    #[test]
    fn test_details_from_claims() {
        let details = AccessDetails::from(AccessClaims::new(9, "a", "r", 0));
        assert_eq!(details.session_id, "a");
        assert_eq!(details.refresh_session_id, "r");
        assert_eq!(details.user_id, 9);
    }
}
