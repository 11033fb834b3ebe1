//! Create User Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{User, UserData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a user
pub struct CreateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: UserData) -> Result<User, UseCaseError> {
        let user = User::new(data);
        self.user_repository.create(&user).await?;

        tracing::info!(user_id = %user.id(), "User created");
        Ok(user)
    }
}
