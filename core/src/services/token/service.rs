//! Main token service implementation

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::token::{
    AccessClaims, AccessDetails, RefreshClaims, RefreshDetails, TokenDetails,
};
use crate::errors::{DomainError, StoreError, TokenError};
use crate::repositories::SessionStore;

use super::config::TokenServiceConfig;
use super::signer::Signer;

/// Issues, verifies, persists and revokes access/refresh token pairs
///
/// A token is only live while its session record exists in the store. The
/// record key is the session id embedded in the token and its value is the
/// owning user id.
pub struct TokenService<S: SessionStore> {
    store: Arc<S>,
    config: TokenServiceConfig,
    access_signer: Signer,
    refresh_signer: Signer,
}

impl<S: SessionStore> TokenService<S> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `store` - Session store holding one record per live token
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService` or an error when the secrets are unusable
    pub fn new(store: Arc<S>, config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.access_secret.is_empty() || config.refresh_secret.is_empty() {
            return Err(DomainError::Validation {
                message: "access and refresh secrets must be set".to_string(),
            });
        }
        if config.access_secret == config.refresh_secret {
            return Err(DomainError::Validation {
                message: "access and refresh secrets must differ".to_string(),
            });
        }
        if config.access_token_expiry_seconds <= 0 || config.refresh_token_expiry_seconds <= 0 {
            return Err(DomainError::Validation {
                message: "token lifetimes must be positive".to_string(),
            });
        }

        let access_signer = Signer::new(&config.access_secret, config.algorithm);
        let refresh_signer = Signer::new(&config.refresh_secret, config.algorithm);

        Ok(Self {
            store,
            config,
            access_signer,
            refresh_signer,
        })
    }

    /// Mints a fresh access/refresh pair for `user_id`
    ///
    /// Nothing is written to the store; call [`persist`](Self::persist) next.
    pub fn issue(&self, user_id: u64) -> Result<TokenDetails, DomainError> {
        let now = Utc::now().timestamp();
        let access_session_id = Uuid::new_v4().to_string();
        let refresh_session_id = Uuid::new_v4().to_string();
        let access_expires_at = now + self.config.access_token_expiry_seconds;
        let refresh_expires_at = now + self.config.refresh_token_expiry_seconds;

        let access_claims = AccessClaims::new(
            user_id,
            &access_session_id,
            &refresh_session_id,
            access_expires_at,
        );
        let refresh_claims = RefreshClaims::new(user_id, &refresh_session_id, refresh_expires_at);

        let access_token = self.access_signer.sign(&access_claims)?;
        let refresh_token = self.refresh_signer.sign(&refresh_claims)?;

        tracing::debug!(
            user_id,
            access_session_id = %access_session_id,
            refresh_session_id = %refresh_session_id,
            "Issued token pair"
        );

        Ok(TokenDetails {
            access_token,
            refresh_token,
            access_session_id,
            refresh_session_id,
            access_expires_at,
            refresh_expires_at,
        })
    }

    /// Writes both session records with TTL equal to each token's remaining lifetime
    ///
    /// The access record is written first. A failed refresh write leaves the
    /// access record in place; it expires with the access token.
    pub async fn persist(&self, user_id: u64, details: &TokenDetails) -> Result<(), DomainError> {
        let now = Utc::now().timestamp();
        let access_ttl = remaining_lifetime(details.access_expires_at, now)?;
        let refresh_ttl = remaining_lifetime(details.refresh_expires_at, now)?;
        let owner = user_id.to_string();

        self.with_timeout(
            "SET",
            self.store.set(&details.access_session_id, &owner, access_ttl),
        )
        .await?;

        if let Err(e) = self
            .with_timeout(
                "SET",
                self.store.set(&details.refresh_session_id, &owner, refresh_ttl),
            )
            .await
        {
            tracing::warn!(
                user_id,
                access_session_id = %details.access_session_id,
                error = %e,
                "Refresh session write failed after access session was stored"
            );
            return Err(e);
        }

        tracing::info!(
            user_id,
            access_session_id = %details.access_session_id,
            refresh_session_id = %details.refresh_session_id,
            "Persisted session pair"
        );
        Ok(())
    }

    /// Verifies an access token and derives its details
    pub fn verify_access(&self, token: &str) -> Result<AccessDetails, DomainError> {
        let claims: AccessClaims = self.access_signer.parse(token)?;
        claims.validate()?;
        Ok(claims.into())
    }

    /// Verifies a refresh token and derives its details
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshDetails, DomainError> {
        let claims: RefreshClaims = self.refresh_signer.parse(token)?;
        claims.validate()?;
        Ok(claims.into())
    }

    /// Reads the owner of a live session
    ///
    /// A missing record (expired or revoked) is `SessionNotFound`.
    pub async fn fetch_owner(&self, session_id: &str) -> Result<u64, DomainError> {
        let value = self
            .with_timeout("GET", self.store.get(session_id))
            .await?
            .ok_or(TokenError::SessionNotFound)?;

        value.parse::<u64>().map_err(|_| {
            StoreError::CorruptRecord {
                key: session_id.to_string(),
            }
            .into()
        })
    }

    /// Deletes a session record and returns how many records were removed
    ///
    /// `0` means the session was unknown, expired or already revoked.
    pub async fn revoke(&self, session_id: &str) -> Result<u64, DomainError> {
        let deleted = self
            .with_timeout("DEL", self.store.delete(session_id))
            .await?;

        tracing::info!(session_id, deleted, "Revoked session");
        Ok(deleted)
    }

    /// Verifies a refresh token, revokes its session and mints a new pair
    ///
    /// The new pair is not persisted.
    pub async fn rotate(&self, refresh_token: &str) -> Result<(u64, TokenDetails), DomainError> {
        let details = self.verify_refresh(refresh_token)?;
        self.rotate_session(&details).await
    }

    /// Rotation for an already verified refresh token
    ///
    /// Fails with `SessionRevoked` when the refresh record was already gone.
    /// The previous access session is left to expire on its own.
    pub async fn rotate_session(
        &self,
        details: &RefreshDetails,
    ) -> Result<(u64, TokenDetails), DomainError> {
        let deleted = self.revoke(&details.session_id).await?;
        if deleted == 0 {
            tracing::warn!(
                user_id = details.user_id,
                refresh_session_id = %details.session_id,
                "Rotation attempted with a dead refresh session"
            );
            return Err(TokenError::SessionRevoked.into());
        }

        let tokens = self.issue(details.user_id)?;
        tracing::info!(
            user_id = details.user_id,
            old_refresh_session_id = %details.session_id,
            refresh_session_id = %tokens.refresh_session_id,
            "Rotated refresh session"
        );
        Ok((details.user_id, tokens))
    }

    async fn with_timeout<T, F>(&self, operation: &'static str, call: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>>,
    {
        match tokio::time::timeout(self.config.store_timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(operation, "Session store call timed out");
                Err(StoreError::Timeout {
                    operation,
                    timeout_ms: self.config.store_timeout.as_millis() as u64,
                }
                .into())
            }
        }
    }
}

fn remaining_lifetime(expires_at: i64, now: i64) -> Result<Duration, DomainError> {
    let seconds = expires_at - now;
    if seconds <= 0 {
        return Err(TokenError::TokenExpired.into());
    }
    Ok(Duration::from_secs(seconds as u64))
}
