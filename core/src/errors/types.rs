//! Error types for token handling, authentication and the session store

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please provide valid login details")]
    InvalidCredentials,
}

/// Token-related errors
///
/// Signature, format and claim problems describe a bad token. The session
/// variants describe a well-formed token whose record in the session store
/// is missing or disagrees with it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Unexpected signing method")]
    InvalidAlgorithm,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token is not marked as authorized")]
    NotAuthorized,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Session already revoked")]
    SessionRevoked,

    #[error("Token owner does not match session owner")]
    IdentityMismatch,
}

impl TokenError {
    /// Whether the presented token itself failed verification
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            TokenError::TokenExpired
                | TokenError::InvalidTokenFormat
                | TokenError::InvalidSignature
                | TokenError::InvalidAlgorithm
                | TokenError::InvalidClaims
                | TokenError::MissingClaim { .. }
                | TokenError::NotAuthorized
        )
    }
}

/// Session store failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Session store error: {message}")]
    Backend { message: String },

    #[error("Session store {operation} timed out after {timeout_ms}ms")]
    Timeout {
        operation: &'static str,
        timeout_ms: u64,
    },

    #[error("Corrupt session record: {key}")]
    CorruptRecord { key: String },

    #[error("Session store unavailable: {message}")]
    Unavailable { message: String },
}
