//! Memo DTOs
//!
//! Data transfer objects for memo API endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::use_cases::memos::MemoQuery;
use crate::domain::models::memo::{Memo, MemoData};
use crate::domain::models::pagination::Pagination;

/// Page used when the query string has none
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the query string has none
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Request body for create (POST) and full update (PUT)
#[derive(Debug, Clone, Deserialize)]
pub struct MemoRequestDto {
    pub body: String,

    /// Missing and `null` both mean no tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl From<MemoRequestDto> for MemoData {
    fn from(dto: MemoRequestDto) -> Self {
        Self {
            body: dto.body,
            tags: dto.tags.unwrap_or_default(),
        }
    }
}

/// Response body for a created memo
#[derive(Debug, Clone, Serialize)]
pub struct CreateMemoResponseDto {
    pub id: String,
}

/// Query string of `GET /api/memos`
///
/// Bounds are checked by the list use case, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMemosParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub tag: Option<String>,
}

impl From<ListMemosParams> for MemoQuery {
    fn from(params: ListMemosParams) -> Self {
        Self {
            page: params.page.unwrap_or(DEFAULT_PAGE),
            page_size: params.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            tag: params.tag,
        }
    }
}

/// Memo item as exposed over HTTP
#[derive(Debug, Clone, Serialize)]
pub struct MemoResponseDto {
    pub id: String,
    pub body: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Memo> for MemoResponseDto {
    fn from(memo: &Memo) -> Self {
        Self {
            id: memo.id().to_string(),
            body: memo.body().to_string(),
            tags: memo.tags().to_vec(),
            created_at: memo.created_at(),
            updated_at: memo.updated_at(),
        }
    }
}

impl From<Memo> for MemoResponseDto {
    fn from(memo: Memo) -> Self {
        Self::from(&memo)
    }
}

/// Pagination block of a list response
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaginationDto {
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub total_count: i64,
}

impl From<Pagination> for PaginationDto {
    fn from(pagination: Pagination) -> Self {
        Self {
            page: pagination.page,
            page_size: pagination.page_size,
            total_pages: pagination.total_pages,
            total_count: pagination.total_count,
        }
    }
}

/// Response body of `GET /api/memos`
#[derive(Debug, Clone, Serialize)]
pub struct MemoListResponseDto {
    pub items: Vec<MemoResponseDto>,
    pub pagination: PaginationDto,
}
