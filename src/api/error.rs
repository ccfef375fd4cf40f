use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

use super::validation::FieldViolation;
use crate::services::FavouriteError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    DatabaseError(String),

    Validation(Vec<FieldViolation>),

    Conflict(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::Validation(violations) => {
                write!(f, "Validation failed ({} violations)", violations.len())
            }
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Wire shape for failures: `{"error": "..."}` for simple errors,
/// `{"error": [{field, message}, ...]}` for schema violations.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Violations(Vec<FieldViolation>),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorDetail::Message(msg)),
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorDetail::Message("A database error occurred".to_string()),
                )
            }
            ApiError::Validation(violations) => {
                (StatusCode::BAD_REQUEST, ErrorDetail::Violations(violations))
            }
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, ErrorDetail::Message(msg)),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorDetail::Message("An internal error occurred".to_string()),
                )
            }
        };

        (status, Json(ErrorBody { error: detail })).into_response()
    }
}

impl From<FavouriteError> for ApiError {
    fn from(err: FavouriteError) -> Self {
        match err {
            FavouriteError::NotFound(_) => ApiError::NotFound("Favourite not found".to_string()),
            FavouriteError::Duplicate(_) => {
                ApiError::Conflict("Favourite already exists".to_string())
            }
            FavouriteError::Database(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl ApiError {
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        ApiError::Validation(violations)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::InternalError(msg.into())
    }
}
