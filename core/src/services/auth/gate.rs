//! Session gate consumed by the HTTP middleware

use async_trait::async_trait;

use crate::domain::entities::token::AccessDetails;
use crate::errors::DomainError;

/// Decides whether a bearer token belongs to a live session
#[async_trait]
pub trait SessionGate: Send + Sync {
    /// Returns the session details when the token is valid, its session
    /// record is live and the record's owner matches the token's user.
    /// Never mutates session state.
    async fn authorize(&self, access_token: &str) -> Result<AccessDetails, DomainError>;
}
