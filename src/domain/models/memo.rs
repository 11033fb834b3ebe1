//! Memo Domain Model
//!
//! A memo is a short text note carrying an ordered list of tags.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum number of characters in a memo body, surrounding whitespace included
pub const MAX_BODY_CHARS: usize = 2000;

/// Maximum number of tags attached to a single memo
pub const MAX_TAGS: usize = 10;

/// Maximum number of characters in a single tag
pub const MAX_TAG_CHARS: usize = 30;

/// Newtype wrapper for Memo ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoId(Uuid);

impl MemoId {
    /// Create a new random MemoId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a MemoId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MemoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MemoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for MemoId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// Caller-supplied memo content, used for both create and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoData {
    pub body: String,
    pub tags: Vec<String>,
}

impl MemoData {
    #[must_use]
    pub fn new(body: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            body: body.into(),
            tags,
        }
    }
}

/// Replacement content for an existing memo.
///
/// Carries no `created_at`: the store keeps the original creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoRevision {
    pub id: MemoId,
    pub body: String,
    pub tags: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl MemoRevision {
    /// Build a revision stamped with the current UTC time
    #[must_use]
    pub fn new(id: MemoId, data: MemoData) -> Self {
        Self {
            id,
            body: data.body,
            tags: data.tags,
            updated_at: Utc::now(),
        }
    }
}

/// Memo domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memo {
    id: MemoId,
    body: String,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Memo {
    /// Create a new Memo with a fresh id; `created_at == updated_at == now`
    #[must_use]
    pub fn new(data: MemoData) -> Self {
        let now = Utc::now();
        Self {
            id: MemoId::new(),
            body: data.body,
            tags: data.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Restore a Memo from persisted data
    #[must_use]
    pub fn restore(
        id: MemoId,
        body: String,
        tags: Vec<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            body,
            tags,
            created_at,
            updated_at,
        }
    }

    /// Apply a revision, preserving id and creation time
    #[must_use]
    pub fn revise(self, revision: &MemoRevision) -> Self {
        Self {
            body: revision.body.clone(),
            tags: revision.tags.clone(),
            updated_at: revision.updated_at,
            ..self
        }
    }

    /// Whether the tag list contains `tag` exactly (case-sensitive)
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &MemoId {
        &self.id
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn create_test_data() -> MemoData {
        MemoData::new("buy milk", vec!["shopping".to_string(), "home".to_string()])
    }

    #[test]
    fn test_memo_id_new() {
        let id1 = MemoId::new();
        let id2 = MemoId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_memo_id_try_from_str() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = MemoId::try_from(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn test_memo_id_try_from_invalid_str() {
        assert!(MemoId::try_from("not-a-uuid").is_err());
    }

    #[test]
    fn test_memo_new_stamps_equal_timestamps() {
        let memo = Memo::new(create_test_data());

        assert_eq!(memo.body(), "buy milk");
        assert_eq!(memo.tags(), ["shopping", "home"]);
        assert_eq!(memo.created_at(), memo.updated_at());
    }

    #[test]
    fn test_memo_revise_keeps_id_and_created_at() {
        let memo = Memo::new(create_test_data());
        let original_id = *memo.id();
        let created_at = memo.created_at();

        let mut revision = MemoRevision::new(original_id, MemoData::new("buy bread", vec![]));
        revision.updated_at = created_at + Duration::seconds(5);
        let revised = memo.revise(&revision);

        assert_eq!(revised.id(), &original_id);
        assert_eq!(revised.body(), "buy bread");
        assert!(revised.tags().is_empty());
        assert_eq!(revised.created_at(), created_at);
        assert_eq!(revised.updated_at(), created_at + Duration::seconds(5));
    }

    #[test]
    fn test_has_tag_is_exact_and_case_sensitive() {
        let memo = Memo::new(create_test_data());

        assert!(memo.has_tag("shopping"));
        assert!(!memo.has_tag("Shopping"));
        assert!(!memo.has_tag("shop"));
    }
}
