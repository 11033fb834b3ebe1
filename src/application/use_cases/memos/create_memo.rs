//! Create Memo Use Case
//!
//! Validates a memo payload and stores it under a fresh id.

use std::sync::Arc;

use crate::domain::gateways::MemoRepository;
use crate::domain::models::memo::{Memo, MemoData, MemoId};
use crate::shared::errors::UseCaseError;

use super::validation::validate_memo_data;

/// Use case for creating a new memo
pub struct CreateMemoUseCase {
    memo_repository: Arc<dyn MemoRepository>,
}

impl CreateMemoUseCase {
    /// Create a new CreateMemoUseCase
    #[must_use]
    pub fn new(memo_repository: Arc<dyn MemoRepository>) -> Self {
        Self { memo_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::InvalidMemo` if the body or tags are out of bounds.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: MemoData) -> Result<MemoId, UseCaseError> {
        if let Err(error) = validate_memo_data(&data) {
            tracing::warn!(%error, "Rejected memo payload");
            return Err(error);
        }

        let memo = Memo::new(data);
        self.memo_repository.create(&memo).await?;

        tracing::info!(memo_id = %memo.id(), tags = memo.tags().len(), "Memo created");
        Ok(*memo.id())
    }
}
