// Error types for database operations

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Error types for database connection and query operations
#[derive(Debug, Error)]
pub enum DbError {
    /// Error occurred while connecting or acquiring a pooled connection
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    QueryError(String),

    /// An update or lookup targeted a row that does not exist
    #[error("Record not found: {0}")]
    NotFound(String),

    /// An insert or update collided with a unique index
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
}

impl From<DbErr> for DbError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(msg)) = err.sql_err() {
            return DbError::UniqueViolation(msg);
        }

        match err {
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
                DbError::ConnectionError(err.to_string())
            }
            DbErr::RecordNotFound(msg) => DbError::NotFound(msg),
            DbErr::RecordNotUpdated => DbError::NotFound("record was not updated".to_string()),
            other => DbError::QueryError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rows_become_not_found() {
        let err: DbError = DbErr::RecordNotFound("startup 7".to_string()).into();
        assert!(matches!(err, DbError::NotFound(msg) if msg == "startup 7"));

        let err: DbError = DbErr::RecordNotUpdated.into();
        assert!(matches!(err, DbError::NotFound(_)));
    }

    #[test]
    fn other_errors_become_query_errors() {
        let err: DbError = DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, DbError::QueryError(msg) if msg.contains("boom")));
    }
}
