//! User repository backed by a fixed list of identities

use async_trait::async_trait;
use tg_shared::config::ReferenceUser;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// Serves users configured at startup
#[derive(Debug, Clone, Default)]
pub struct StaticUserRepository {
    users: Vec<User>,
}

impl StaticUserRepository {
    /// Create a repository holding exactly `users`
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Create a repository holding the configured reference identity
    pub fn from_reference(reference: &ReferenceUser) -> Self {
        Self::new(vec![User::new(
            reference.id,
            reference.username.clone(),
            reference.password.clone(),
        )])
    }
}

#[async_trait]
impl UserRepository for StaticUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }
}
