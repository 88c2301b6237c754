//! Authentication service module
//!
//! Login, logout and refresh orchestration on top of the token service,
//! plus the session gate protecting downstream routes.

mod config;
mod gate;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use gate::SessionGate;
pub use service::AuthService;
