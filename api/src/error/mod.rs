use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Debug)]
pub enum LaunchpadError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Conflict: {0}")]
    Conflict(String),
}

pub type LaunchpadResult<T> = Result<T, LaunchpadError>;

impl LaunchpadError {
    pub fn status(&self) -> StatusCode {
        match self {
            LaunchpadError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            LaunchpadError::NotFound(_) => StatusCode::NOT_FOUND,
            LaunchpadError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            LaunchpadError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for LaunchpadError {
    fn into_response(self) -> Response {
        let status = self.status();
        let err_msg = match self {
            LaunchpadError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                // Don't leak SQL details to clients
                "Internal database error".to_string()
            }
            LaunchpadError::NotFound(msg)
            | LaunchpadError::InvalidRequest(msg)
            | LaunchpadError::Conflict(msg) => msg,
        };

        let body = Json(json!({
            "error": err_msg
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for LaunchpadError {
    fn from(rejection: JsonRejection) -> Self {
        LaunchpadError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for LaunchpadError {
    fn from(rejection: QueryRejection) -> Self {
        LaunchpadError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for LaunchpadError {
    fn from(rejection: PathRejection) -> Self {
        LaunchpadError::InvalidRequest(rejection.body_text())
    }
}

// DbError to LaunchpadError conversion implementation
impl From<DbError> for LaunchpadError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionError(msg) | DbError::QueryError(msg) => {
                LaunchpadError::DatabaseError(msg)
            }
            DbError::NotFound(msg) => LaunchpadError::NotFound(msg),
            DbError::UniqueViolation(msg) => LaunchpadError::Conflict(msg),
        }
    }
}
