//! User Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::user::{CreateUserDto, UserResponseDto};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for user endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_users).post(create_user))
}

/// GET /users - List all users, oldest first
#[axum::debug_handler]
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponseDto>>, ApiError> {
    let users = state.list_users_use_case.execute().await?;

    Ok(Json(users.into_iter().map(UserResponseDto::from).collect()))
}

/// POST /users - Create a new user
///
/// # Responses
///
/// * 201 Created - User created
/// * 400 Bad Request - Malformed body or validation error
#[axum::debug_handler]
async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponseDto>), ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let user = state.create_user_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponseDto::from(user))))
}
