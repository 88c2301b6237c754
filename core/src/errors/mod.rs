//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, StoreError, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DomainError {
    /// Whether this error means the caller presented a bad token
    pub fn is_token_verification_failure(&self) -> bool {
        match self {
            DomainError::Token(err) => err.is_verification_failure(),
            _ => false,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_messages() {
        let err: DomainError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "Please provide valid login details");

        let err: DomainError = StoreError::Timeout {
            operation: "GET",
            timeout_ms: 3000,
        }
        .into();
        assert_eq!(err.to_string(), "Session store GET timed out after 3000ms");
    }

    #[test]
    fn test_verification_failure_classification() {
        assert!(DomainError::from(TokenError::InvalidSignature).is_token_verification_failure());
        assert!(DomainError::from(TokenError::TokenExpired).is_token_verification_failure());
        assert!(!DomainError::from(TokenError::SessionRevoked).is_token_verification_failure());
        assert!(!DomainError::Store(StoreError::Backend {
            message: "down".into()
        })
        .is_token_verification_failure());
    }
}
