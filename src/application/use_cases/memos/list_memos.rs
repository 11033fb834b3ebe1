//! List Memos Use Case
//!
//! Offset-paginated listing, newest first, optionally filtered by one tag.

use std::sync::Arc;

use crate::domain::gateways::{MemoListQuery, MemoRepository};
use crate::domain::models::memo::Memo;
use crate::domain::models::pagination::Pagination;
use crate::shared::errors::UseCaseError;

use super::validation::{normalize_tag_filter, validate_page};

/// Parameters for one list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoQuery {
    pub page: i64,
    pub page_size: i64,
    pub tag: Option<String>,
}

/// One page of memos
#[derive(Debug, Clone)]
pub struct MemoListing {
    pub items: Vec<Memo>,
    pub pagination: Pagination,
    /// The trimmed tag filter that was applied
    pub tag: Option<String>,
}

/// Use case for listing memos
pub struct ListMemosUseCase {
    memo_repository: Arc<dyn MemoRepository>,
}

impl ListMemosUseCase {
    /// Create a new ListMemosUseCase
    #[must_use]
    pub fn new(memo_repository: Arc<dyn MemoRepository>) -> Self {
        Self { memo_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::InvalidMemoQuery` if `page < 1`, `page_size` is outside
    /// `1..=100`, or the trimmed tag is empty or longer than 30 characters.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, query: MemoQuery) -> Result<MemoListing, UseCaseError> {
        let MemoQuery {
            page,
            page_size,
            tag,
        } = query;

        let validated = validate_page(page, page_size).and_then(|()| normalize_tag_filter(tag));
        let tag = match validated {
            Ok(tag) => tag,
            Err(error) => {
                tracing::warn!(%error, page, page_size, "Rejected memo query");
                return Err(error);
            }
        };

        tracing::debug!(page, page_size, tag = ?tag, "Listing memos");

        let list_query = MemoListQuery {
            tag,
            limit: page_size,
            offset: Pagination::offset(page, page_size),
        };
        let (items, total_count) = self.memo_repository.list(&list_query).await?;
        let pagination = Pagination::new(page, page_size, total_count);

        tracing::debug!(
            returned = items.len(),
            total_count,
            total_pages = pagination.total_pages,
            "Listed memos"
        );

        Ok(MemoListing {
            items,
            pagination,
            tag: list_query.tag,
        })
    }
}
