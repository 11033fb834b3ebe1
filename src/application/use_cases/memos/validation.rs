//! Memo Input Validation
//!
//! Bounds shared by create, update and list. Lengths count chars, not bytes.

use crate::domain::models::memo::{MemoData, MAX_BODY_CHARS, MAX_TAGS, MAX_TAG_CHARS};
use crate::shared::errors::UseCaseError;

/// Largest page a list query may request
const MAX_PAGE_SIZE: i64 = 100;

/// Check body and tag bounds for a create or update payload
pub(super) fn validate_memo_data(data: &MemoData) -> Result<(), UseCaseError> {
    if data.body.trim().is_empty() {
        return Err(UseCaseError::InvalidMemo("body must not be blank".to_string()));
    }
    // Upper bound applies to the raw body, whitespace included.
    if data.body.chars().count() > MAX_BODY_CHARS {
        return Err(UseCaseError::InvalidMemo(format!(
            "body must be at most {MAX_BODY_CHARS} characters"
        )));
    }

    if data.tags.len() > MAX_TAGS {
        return Err(UseCaseError::InvalidMemo(format!(
            "at most {MAX_TAGS} tags are allowed"
        )));
    }
    if let Some(tag) = data
        .tags
        .iter()
        .find(|tag| !(1..=MAX_TAG_CHARS).contains(&tag.chars().count()))
    {
        return Err(UseCaseError::InvalidMemo(format!(
            "tag '{tag}' must be between 1 and {MAX_TAG_CHARS} characters"
        )));
    }

    Ok(())
}

/// Check paging bounds
pub(super) fn validate_page(page: i64, page_size: i64) -> Result<(), UseCaseError> {
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(UseCaseError::InvalidMemoQuery(format!(
            "page_size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }
    if page < 1 {
        return Err(UseCaseError::InvalidMemoQuery("page must be at least 1".to_string()));
    }
    Ok(())
}

/// Trim a tag filter; the trimmed value is what gets applied downstream
pub(super) fn normalize_tag_filter(tag: Option<String>) -> Result<Option<String>, UseCaseError> {
    let Some(tag) = tag else {
        return Ok(None);
    };

    let trimmed = tag.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_TAG_CHARS {
        return Err(UseCaseError::InvalidMemoQuery(format!(
            "tag must be between 1 and {MAX_TAG_CHARS} characters"
        )));
    }
    Ok(Some(trimmed.to_string()))
}
