//! In-Memory User Repository Implementation

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::errors::RepositoryError;

/// In-memory implementation of UserRepository, insertion ordered
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.users.read().await.clone())
    }

    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        self.users.write().await.push(user.clone());
        Ok(())
    }
}
