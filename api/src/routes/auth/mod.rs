//! Authentication route handlers
//!
//! - Login with the reference credential
//! - Logout of the presented access session
//! - Token refresh

pub mod login;
pub mod logout;
pub mod refresh;
