//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::models::memo::MemoId;

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Use case-level errors.
///
/// Callers branch on the variant, never on the message text.
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("invalid memo: {0}")]
    InvalidMemo(String),

    #[error("invalid memo query: {0}")]
    InvalidMemoQuery(String),

    #[error("memo with id '{0}' not found")]
    MemoNotFound(MemoId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidMemo(_) | Self::InvalidMemoQuery(_) => StatusCode::BAD_REQUEST,
            Self::MemoNotFound(_) => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMemo(_) => "INVALID_MEMO",
            Self::InvalidMemoQuery(_) => "INVALID_MEMO_QUERY",
            Self::MemoNotFound(_) => "NOT_FOUND",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Message returned for every 500 response
const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ApiError::UseCase(uc_error) => {
                let status = uc_error.status_code();
                let message = if status.is_server_error() {
                    tracing::error!(error = %uc_error, "Request failed with an internal error");
                    INTERNAL_ERROR_MESSAGE.to_string()
                } else {
                    uc_error.to_string()
                };
                (status, uc_error.error_code().to_string(), message, None)
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST".to_string(), msg.clone(), None)
            }
            ApiError::Validation(errors) => {
                let details = errors
                    .iter()
                    .map(|e| {
                        let (field, message) = e.split_once(": ").unwrap_or(("", e.as_str()));
                        FieldError {
                            field: field.to_string(),
                            message: message.to_string(),
                        }
                    })
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR".to_string(),
                    "Request validation failed".to_string(),
                    Some(details),
                )
            }
            ApiError::InvalidUuid(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_UUID".to_string(), msg.clone(), None)
            }
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR".to_string(),
                    INTERNAL_ERROR_MESSAGE.to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<uuid::Error> for ApiError {
    fn from(err: uuid::Error) -> Self {
        ApiError::InvalidUuid(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        messages.sort();
        ApiError::Validation(messages)
    }
}
