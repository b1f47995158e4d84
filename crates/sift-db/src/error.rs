//! Error types for sift-db.

use miette::Diagnostic;
use thiserror::Error;

/// Database error type for sift-db operations.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Database connection failed: {0}")]
    #[diagnostic(
        code(sift_db::connection),
        help("Check if the database file exists and is accessible")
    )]
    ConnectionError(String),

    #[error("Database query failed: {0}")]
    #[diagnostic(
        code(sift_db::query),
        help("Try re-importing the catalog with 'sift import'")
    )]
    QueryError(String),

    #[error("Database migration failed: {0}")]
    #[diagnostic(
        code(sift_db::migration),
        help("The database schema may be corrupted. Try removing the file and re-importing.")
    )]
    MigrationError(String),

    #[error("Database integrity error: {0}")]
    #[diagnostic(
        code(sift_db::integrity),
        help("A stored row could not be read back. Try removing the file and re-importing.")
    )]
    IntegrityError(String),

    #[error("Thread lock poison error")]
    #[diagnostic(
        code(sift_db::poison),
        help("This is an internal error, please report it")
    )]
    PoisonError,
}

impl From<diesel::result::Error> for DbError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(_, info) => {
                DbError::QueryError(info.message().to_string())
            }
            other => DbError::QueryError(other.to_string()),
        }
    }
}

impl From<diesel::result::ConnectionError> for DbError {
    fn from(err: diesel::result::ConnectionError) -> Self {
        DbError::ConnectionError(err.to_string())
    }
}

/// Result type alias for sift-db operations.
pub type Result<T> = std::result::Result<T, DbError>;
