//! List Users Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::errors::UseCaseError;

/// Use case for listing all users
pub struct ListUsersUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<User>, UseCaseError> {
        let users = self.user_repository.list().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::user_repository::MockUserRepository;
    use crate::domain::models::user::UserData;
    use crate::shared::errors::RepositoryError;

    #[tokio::test]
    async fn should_return_users_from_repository() {
        let users = vec![User::new(UserData {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        })];
        let expected = users.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_list().returning(move || Ok(users.clone()));

        let use_case = ListUsersUseCase::new(Arc::new(repo));
        assert_eq!(use_case.execute().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .returning(|| Err(RepositoryError::Database(sqlx::Error::PoolClosed)));

        let use_case = ListUsersUseCase::new(Arc::new(repo));
        assert!(matches!(
            use_case.execute().await,
            Err(UseCaseError::Repository(_))
        ));
    }
}
