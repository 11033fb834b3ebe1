//! In-Memory Memo Repository Implementation
//!
//! Keeps memos in a `RwLock`-guarded map. Used by tests and local runs
//! without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::{MemoListQuery, MemoRepository};
use crate::domain::models::memo::{Memo, MemoId, MemoRevision};
use crate::shared::errors::RepositoryError;

#[derive(Debug, Default)]
struct Store {
    memos: HashMap<MemoId, Memo>,
    /// Insertion order, oldest first; breaks `created_at` ties
    order: Vec<MemoId>,
}

/// In-memory implementation of MemoRepository
#[derive(Debug, Default)]
pub struct InMemoryMemoRepository {
    store: RwLock<Store>,
}

impl InMemoryMemoRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored memos
    pub async fn len(&self) -> usize {
        self.store.read().await.memos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MemoRepository for InMemoryMemoRepository {
    async fn create(&self, memo: &Memo) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        if store.memos.insert(*memo.id(), memo.clone()).is_some() {
            return Err(RepositoryError::Mapping(format!("duplicate memo id {}", memo.id())));
        }
        store.order.push(*memo.id());
        Ok(())
    }

    async fn list(&self, query: &MemoListQuery) -> Result<(Vec<Memo>, i64), RepositoryError> {
        let store = self.store.read().await;

        // Newest insert first, then a stable sort keeps that order among equal timestamps.
        let mut matching: Vec<&Memo> = store
            .order
            .iter()
            .rev()
            .filter_map(|id| store.memos.get(id))
            .filter(|memo| query.tag.as_deref().map_or(true, |tag| memo.has_tag(tag)))
            .collect();
        matching.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        let total = i64::try_from(matching.len())
            .map_err(|e| RepositoryError::Mapping(format!("Count overflow: {e}")))?;
        let offset = usize::try_from(query.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit).unwrap_or(0);

        let items = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn find_by_id(&self, id: &MemoId) -> Result<Option<Memo>, RepositoryError> {
        Ok(self.store.read().await.memos.get(id).cloned())
    }

    async fn update(&self, revision: &MemoRevision) -> Result<bool, RepositoryError> {
        let mut store = self.store.write().await;
        match store.memos.remove(&revision.id) {
            Some(existing) => {
                store.memos.insert(revision.id, existing.revise(revision));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &MemoId) -> Result<bool, RepositoryError> {
        let mut store = self.store.write().await;
        if store.memos.remove(id).is_none() {
            return Ok(false);
        }
        store.order.retain(|existing| existing != id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::memo::MemoData;
    use chrono::{Duration, TimeZone, Utc};

    fn memo_at(minute: i64, tags: &[&str]) -> Memo {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minute);
        Memo::restore(
            MemoId::new(),
            format!("memo {minute}"),
            tags.iter().map(ToString::to_string).collect(),
            at,
            at,
        )
    }

    fn query(tag: Option<&str>, limit: i64, offset: i64) -> MemoListQuery {
        MemoListQuery {
            tag: tag.map(ToString::to_string),
            limit,
            offset,
        }
    }

    #[tokio::test]
    async fn should_list_newest_first_with_window_and_total() {
        let repo = InMemoryMemoRepository::new();
        for minute in 0..5 {
            repo.create(&memo_at(minute, &[])).await.unwrap();
        }

        let (items, total) = repo.list(&query(None, 2, 1)).await.unwrap();

        assert_eq!(total, 5);
        let bodies: Vec<&str> = items.iter().map(Memo::body).collect();
        assert_eq!(bodies, ["memo 3", "memo 2"]);
    }

    #[tokio::test]
    async fn should_filter_by_exact_tag() {
        let repo = InMemoryMemoRepository::new();
        repo.create(&memo_at(0, &["rust"])).await.unwrap();
        repo.create(&memo_at(1, &["rustacean"])).await.unwrap();
        repo.create(&memo_at(2, &["Rust", "go"])).await.unwrap();

        let (items, total) = repo.list(&query(Some("rust"), 10, 0)).await.unwrap();

        assert_eq!(total, 1);
        assert_eq!(items[0].body(), "memo 0");
    }

    #[tokio::test]
    async fn should_break_timestamp_ties_by_insertion_order() {
        let repo = InMemoryMemoRepository::new();
        let first = memo_at(0, &[]);
        let second = Memo::restore(
            MemoId::new(),
            "second".to_string(),
            vec![],
            first.created_at(),
            first.updated_at(),
        );
        repo.create(&first).await.unwrap();
        repo.create(&second).await.unwrap();

        let (items, _) = repo.list(&query(None, 10, 0)).await.unwrap();

        assert_eq!(items[0].body(), "second");
        assert_eq!(items[1].body(), "memo 0");
    }

    #[tokio::test]
    async fn should_preserve_created_at_on_update() {
        let repo = InMemoryMemoRepository::new();
        let memo = memo_at(0, &["a"]);
        repo.create(&memo).await.unwrap();

        let revision = MemoRevision::new(*memo.id(), MemoData::new("changed", vec![]));
        assert!(repo.update(&revision).await.unwrap());

        let stored = repo.find_by_id(memo.id()).await.unwrap().unwrap();
        assert_eq!(stored.body(), "changed");
        assert_eq!(stored.created_at(), memo.created_at());
        assert_eq!(stored.updated_at(), revision.updated_at);
    }

    #[tokio::test]
    async fn should_report_missing_rows() {
        let repo = InMemoryMemoRepository::new();
        let id = MemoId::new();

        assert!(repo.find_by_id(&id).await.unwrap().is_none());
        assert!(!repo
            .update(&MemoRevision::new(id, MemoData::new("x", vec![])))
            .await
            .unwrap());
        assert!(!repo.delete(&id).await.unwrap());
    }

    #[tokio::test]
    async fn should_delete_memo() {
        let repo = InMemoryMemoRepository::new();
        let memo = memo_at(0, &[]);
        repo.create(&memo).await.unwrap();

        assert!(repo.delete(memo.id()).await.unwrap());
        assert!(repo.is_empty().await);
        let (_, total) = repo.list(&query(None, 10, 0)).await.unwrap();
        assert_eq!(total, 0);
    }
}
