//! Update Memo Use Case (PUT)
//!
//! Replaces body and tags of an existing memo. `created_at` is left to the store.

use std::sync::Arc;

use crate::domain::gateways::MemoRepository;
use crate::domain::models::memo::{MemoData, MemoId, MemoRevision};
use crate::shared::errors::UseCaseError;

use super::validation::validate_memo_data;

/// Use case for a full memo update
pub struct UpdateMemoUseCase {
    memo_repository: Arc<dyn MemoRepository>,
}

impl UpdateMemoUseCase {
    /// Create a new UpdateMemoUseCase
    #[must_use]
    pub fn new(memo_repository: Arc<dyn MemoRepository>) -> Self {
        Self { memo_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::InvalidMemo` if the body or tags are out of bounds.
    /// Returns `UseCaseError::MemoNotFound` if the memo doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &MemoId, data: MemoData) -> Result<(), UseCaseError> {
        tracing::info!(memo_id = %id, "Updating memo");

        if let Err(error) = validate_memo_data(&data) {
            tracing::warn!(memo_id = %id, %error, "Rejected memo payload");
            return Err(error);
        }

        let revision = MemoRevision::new(*id, data);
        if !self.memo_repository.update(&revision).await? {
            tracing::warn!(memo_id = %id, "Memo not found for update");
            return Err(UseCaseError::MemoNotFound(*id));
        }

        tracing::info!(memo_id = %id, "Memo updated successfully");
        Ok(())
    }
}
