//! Delete Memo Use Case
//!
//! Permanently removes a memo.

use std::sync::Arc;

use crate::domain::gateways::MemoRepository;
use crate::domain::models::memo::MemoId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a memo
pub struct DeleteMemoUseCase {
    memo_repository: Arc<dyn MemoRepository>,
}

impl DeleteMemoUseCase {
    /// Create a new DeleteMemoUseCase
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
    pub async fn execute(&self, id: &MemoId) -> Result<(), UseCaseError> {
        tracing::info!(memo_id = %id, "Deleting memo");

        if !self.memo_repository.delete(id).await? {
            tracing::warn!(memo_id = %id, "Memo not found for deletion");
            return Err(UseCaseError::MemoNotFound(*id));
        }

        tracing::info!(memo_id = %id, "Memo deleted successfully");
        Ok(())
    }
}
