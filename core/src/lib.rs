//! # Tollgate Core
//!
//! Core domain layer for the Tollgate gateway.
//! This crate contains the token lifecycle and revocation engine, the
//! session store and user lookup interfaces, the login/logout/refresh
//! orchestration behind the auth gate, and the read-through proxy service.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{AccessDetails, Credential, RefreshDetails, TokenDetails, User};
pub use errors::{AuthError, DomainError, DomainResult, StoreError, TokenError};
pub use repositories::{
    FetchError, HostFetcher, ResponseCache, SessionStore, StaticUserRepository, UserRepository,
};
pub use services::{AuthService, ProxyService, SessionGate, Signer, TokenService};
