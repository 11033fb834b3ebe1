//! Get Memo Use Case
//!
//! Retrieves a single memo by its ID.

use std::sync::Arc;

use crate::domain::gateways::MemoRepository;
use crate::domain::models::memo::{Memo, MemoId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a memo by ID
pub struct GetMemoUseCase {
    memo_repository: Arc<dyn MemoRepository>,
}

impl GetMemoUseCase {
    /// Create a new GetMemoUseCase
    #[must_use]
    pub fn new(memo_repository: Arc<dyn MemoRepository>) -> Self {
        Self { memo_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::MemoNotFound` if the memo doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &MemoId) -> Result<Memo, UseCaseError> {
        tracing::debug!(memo_id = %id, "Getting memo by ID");

        self.memo_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(memo_id = %id, "Memo not found");
            UseCaseError::MemoNotFound(*id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::memo_repository::MockMemoRepository;
    use crate::domain::models::memo::MemoData;
    use crate::shared::errors::RepositoryError;

    #[tokio::test]
    async fn should_return_memo_when_found() {
        let memo = Memo::new(MemoData::new("b", vec!["t".to_string()]));
        let id = *memo.id();
        let stored = memo.clone();

        let mut repo = MockMemoRepository::new();
        repo.expect_find_by_id()
            .withf(move |requested| *requested == id)
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let use_case = GetMemoUseCase::new(Arc::new(repo));
        let found = use_case.execute(&id).await.unwrap();

        assert_eq!(found, memo);
    }

    #[tokio::test]
    async fn should_return_not_found_when_memo_does_not_exist() {
        let mut repo = MockMemoRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let id = MemoId::new();
        let use_case = GetMemoUseCase::new(Arc::new(repo));
        let result = use_case.execute(&id).await;

        assert!(matches!(result, Err(UseCaseError::MemoNotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn should_propagate_repository_error_unchanged() {
        let mut repo = MockMemoRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(RepositoryError::Mapping("bad row".to_string())));

        let use_case = GetMemoUseCase::new(Arc::new(repo));
        let result = use_case.execute(&MemoId::new()).await;

        assert!(matches!(
            result,
            Err(UseCaseError::Repository(RepositoryError::Mapping(_)))
        ));
    }
}
