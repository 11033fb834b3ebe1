//! Memo Handlers
//!
//! HTTP handlers for memo CRUD operations.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::domain::models::memo::MemoId;
use crate::infrastructure::driving_adapters::api_rest::dto::memo::{
    CreateMemoResponseDto, ListMemosParams, MemoListResponseDto, MemoRequestDto, MemoResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::link::build_link_header;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Path the memo router is mounted under
pub const MEMOS_BASE_PATH: &str = "/api/memos";

/// Create the router for memo endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_memos).post(create_memo))
        .route("/{id}", get(get_memo).put(update_memo).delete(delete_memo))
}

fn parse_memo_id(id: &str) -> Result<MemoId, ApiError> {
    MemoId::try_from(id).map_err(ApiError::from)
}

/// POST /api/memos - Create a new memo
///
/// # Responses
///
/// * 201 Created - `{id}` with a `Location` header
/// * 400 Bad Request - Malformed body or invalid memo
#[axum::debug_handler]
async fn create_memo(
    State(state): State<AppState>,
    payload: Result<Json<MemoRequestDto>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(dto) = payload?;

    let id = state.create_memo_use_case.execute(dto.into()).await?;

    let location = HeaderValue::from_str(&format!("{MEMOS_BASE_PATH}/{id}"))
        .map_err(anyhow::Error::from)?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreateMemoResponseDto { id: id.to_string() }),
    )
        .into_response())
}

/// GET /api/memos - List memos, newest first
///
/// # Query
///
/// `page` (default 1), `page_size` (default 20, max 100), `tag` (exact match)
///
/// # Responses
///
/// * 200 OK - Items and pagination, with a `Link` header when other pages exist
/// * 400 Bad Request - Invalid paging or tag parameters
#[axum::debug_handler]
async fn list_memos(
    State(state): State<AppState>,
    params: Result<Query<ListMemosParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;

    let listing = state.list_memos_use_case.execute(params.into()).await?;

    let link = build_link_header(MEMOS_BASE_PATH, &listing.pagination, listing.tag.as_deref());
    let body = MemoListResponseDto {
        items: listing.items.iter().map(MemoResponseDto::from).collect(),
        pagination: listing.pagination.into(),
    };

    let mut response = Json(body).into_response();
    if !link.is_empty() {
        let value = HeaderValue::from_str(&link).map_err(anyhow::Error::from)?;
        response.headers_mut().insert(header::LINK, value);
    }
    Ok(response)
}

/// GET /api/memos/{id} - Get a memo by ID
///
/// # Responses
///
/// * 200 OK - Memo found
/// * 400 Bad Request - Id is not a UUID
/// * 404 Not Found - Memo does not exist
#[axum::debug_handler]
async fn get_memo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MemoResponseDto>, ApiError> {
    let memo_id = parse_memo_id(&id)?;

    let memo = state.get_memo_use_case.execute(&memo_id).await?;

    Ok(Json(MemoResponseDto::from(memo)))
}

/// PUT /api/memos/{id} - Replace body and tags of a memo
///
/// # Responses
///
/// * 204 No Content - Memo updated
/// * 400 Bad Request - Invalid id, malformed body or invalid memo
/// * 404 Not Found - Memo does not exist
#[axum::debug_handler]
async fn update_memo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<MemoRequestDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let memo_id = parse_memo_id(&id)?;
    let Json(dto) = payload?;

    state.update_memo_use_case.execute(&memo_id, dto.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/memos/{id} - Delete a memo
///
/// # Responses
///
/// * 204 No Content - Memo deleted
/// * 400 Bad Request - Id is not a UUID
/// * 404 Not Found - Memo does not exist
#[axum::debug_handler]
async fn delete_memo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let memo_id = parse_memo_id(&id)?;

    state.delete_memo_use_case.execute(&memo_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
