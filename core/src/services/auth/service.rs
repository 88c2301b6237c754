//! Main authentication service implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::token::{AccessDetails, TokenDetails};
use crate::domain::entities::user::Credential;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{SessionStore, UserRepository};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::gate::SessionGate;

/// Authentication service for the login/logout/refresh flow
pub struct AuthService<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    /// User lookup for credential checks
    user_repository: Arc<U>,
    /// Token service for minting and revoking sessions
    token_service: Arc<TokenService<S>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, S> AuthService<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository used to look up login names
    /// * `token_service` - Service for token and session management
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService<S>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    pub fn token_service(&self) -> &Arc<TokenService<S>> {
        &self.token_service
    }

    /// Authenticate a credential and open a new session pair
    ///
    /// This method:
    /// 1. Looks the user up by name
    /// 2. Compares the password in constant time
    /// 3. Issues a token pair and persists both session records
    ///
    /// Unknown names and wrong passwords both yield `InvalidCredentials`.
    pub async fn login(&self, credential: &Credential) -> DomainResult<TokenDetails> {
        let user = self
            .user_repository
            .find_by_username(&credential.username)
            .await?
            .filter(|user| user.matches(credential))
            .ok_or_else(|| {
                tracing::info!(username = %credential.username, "Rejected login attempt");
                AuthError::InvalidCredentials
            })?;

        let tokens = self.token_service.issue(user.id)?;
        self.token_service.persist(user.id, &tokens).await?;

        tracing::info!(user_id = user.id, "User logged in");
        Ok(tokens)
    }

    /// Revoke the session behind an access token
    ///
    /// An access session that is already gone yields `Unauthorized`. With
    /// `logout_revokes_refresh` set, the paired refresh session is deleted
    /// too; its absence or a store failure while deleting it is logged and
    /// does not fail the logout.
    pub async fn logout(&self, access_token: &str) -> DomainResult<()> {
        let details = self.token_service.verify_access(access_token)?;

        let deleted = self.token_service.revoke(&details.session_id).await?;
        if deleted == 0 {
            return Err(DomainError::Unauthorized);
        }

        if self.config.logout_revokes_refresh {
            if let Err(e) = self.token_service.revoke(&details.refresh_session_id).await {
                // Access session is already gone; the refresh record expires by TTL.
                tracing::warn!(
                    user_id = details.user_id,
                    refresh_session_id = %details.refresh_session_id,
                    error = %e,
                    "Paired refresh session could not be revoked at logout"
                );
            }
        }

        tracing::info!(
            user_id = details.user_id,
            access_session_id = %details.session_id,
            "User logged out"
        );
        Ok(())
    }

    /// Exchange a refresh token for a new persisted pair
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenDetails> {
        let (user_id, tokens) = self.token_service.rotate(refresh_token).await?;
        self.token_service.persist(user_id, &tokens).await?;
        Ok(tokens)
    }

    /// Check an access token against its live session record
    pub async fn authorize(&self, access_token: &str) -> DomainResult<AccessDetails> {
        let details = self.token_service.verify_access(access_token)?;
        let owner = self.token_service.fetch_owner(&details.session_id).await?;

        if owner != details.user_id {
            tracing::warn!(
                claimed = details.user_id,
                recorded = owner,
                session_id = %details.session_id,
                "Token owner does not match session owner"
            );
            return Err(TokenError::IdentityMismatch.into());
        }

        Ok(details)
    }
}

#[async_trait]
impl<U, S> SessionGate for AuthService<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    async fn authorize(&self, access_token: &str) -> Result<AccessDetails, DomainError> {
        AuthService::authorize(self, access_token).await
    }
}
