// Error types for database operations

use thiserror::Error;

/// Error types for database connection and query operations
#[derive(Debug, Error)]
pub enum DbError {
    /// Error occurred during database connection attempt
    #[error("Database connection error: {0}")]
    ConnectionError(#[source] sqlx::Error),

    /// Error occurred during query execution or row decoding
    #[error("Database query error: {0}")]
    QueryError(#[from] sea_orm::DbErr),
}
