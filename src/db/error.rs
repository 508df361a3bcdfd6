//! Store error type
//!
//! Everything the store can fail at collapses into two cases: getting a
//! connection out of the pool, and running a statement against the games
//! table. Handlers attach the message to the HTTP error body as-is.

use deadpool_postgres::PoolError;

#[derive(Debug)]
pub enum DbError {
    /// No connection could be checked out of the pool.
    Connection(PoolError),
    /// A statement against the games table failed.
    Query(tokio_postgres::Error),
}

impl From<PoolError> for DbError {
    fn from(e: PoolError) -> Self {
        DbError::Connection(e)
    }
}

impl From<tokio_postgres::Error> for DbError {
    fn from(e: tokio_postgres::Error) -> Self {
        DbError::Query(e)
    }
}

impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbError::Connection(e) => write!(f, "failed to get a connection from the pool: {}", e),
            DbError::Query(e) => write!(f, "database query failed: {}", e),
        }
    }
}
