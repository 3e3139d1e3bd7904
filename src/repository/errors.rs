use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Could not obtain a pooled database connection.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The underlying query failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A stored value violated a domain constraint when loaded.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
