//! Memo Repository Gateway
//!
//! Abstract trait defining the contract for memo persistence operations.

use async_trait::async_trait;

use crate::domain::models::memo::{Memo, MemoId, MemoRevision};
use crate::shared::errors::RepositoryError;

/// Filter and window for a memo list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoListQuery {
    /// Exact, case-sensitive tag to match; `None` lists every memo
    pub tag: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

/// Repository trait for Memo persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemoRepository: Send + Sync {
    /// Persist a new memo
    async fn create(&self, memo: &Memo) -> Result<(), RepositoryError>;

    /// List one window of memos, newest first, with the total count matching the filter
    async fn list(&self, query: &MemoListQuery) -> Result<(Vec<Memo>, i64), RepositoryError>;

    /// Find a memo by its ID
    async fn find_by_id(&self, id: &MemoId) -> Result<Option<Memo>, RepositoryError>;

    /// Replace body, tags and `updated_at`. Returns `false` when no memo has the id.
    async fn update(&self, revision: &MemoRevision) -> Result<bool, RepositoryError>;

    /// Hard delete. Returns `false` when no memo has the id.
    async fn delete(&self, id: &MemoId) -> Result<bool, RepositoryError>;
}
