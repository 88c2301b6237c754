pub mod auth;
pub mod error;

pub use auth::{LoginRequest, RefreshTokenRequest, TokenResponse, LOGOUT_MESSAGE};
pub use error::{ErrorResponse, ErrorResponseExt};
