//! Domain entities representing core business objects.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::{
    AccessClaims, AccessDetails, RefreshClaims, RefreshDetails, TokenDetails,
    ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS,
};
pub use user::{Credential, User};
