//! User Repository Gateway

use async_trait::async_trait;

use crate::domain::models::user::User;
use crate::shared::errors::RepositoryError;

/// Repository trait for User persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, oldest first
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    async fn create(&self, user: &User) -> Result<(), RepositoryError>;
}
