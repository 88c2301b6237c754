//! Domain layer containing token and user entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::*;
