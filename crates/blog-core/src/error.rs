//! Domain-level error types.

use thiserror::Error;

/// Record store errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Record store connection failed: {0}")]
    Connection(String),

    #[error("Record store query failed: {0}")]
    Query(String),

    #[error("Record not found")]
    NotFound,

    #[error("Record store is not configured: {0}")]
    Misconfigured(String),
}
