//! User repository trait defining the lookup used at login.
//!
//! The gateway ships with a single configured identity, but login goes
//! through this trait so identity storage stays pluggable.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for user lookup
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use tg_core::repositories::UserRepository;
/// use tg_core::domain::entities::user::User;
/// use tg_core::errors::DomainError;
///
/// struct DirectoryUserRepository;
///
/// #[async_trait]
/// impl UserRepository for DirectoryUserRepository {
///     async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
///         // Query the directory here
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by login name
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that name
    /// * `Err(DomainError)` - Lookup failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
