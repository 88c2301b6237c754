//! Token service module
//!
//! This module handles the token lifecycle:
//! - HMAC signing and verification per token class
//! - Issuance and persistence of access/refresh session pairs
//! - Revocation and refresh rotation against the session store

mod config;
mod service;
mod signer;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use signer::Signer;
