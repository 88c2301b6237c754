//! Business services containing domain logic and use cases.

pub mod auth;
pub mod proxy;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, SessionGate};
pub use proxy::{ProxyService, ProxyServiceConfig};
pub use token::{Signer, TokenService, TokenServiceConfig};
