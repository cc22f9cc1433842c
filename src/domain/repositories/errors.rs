use std::error::Error as StdError;

use thiserror::Error;

/// Errors surfaced by repository implementations
///
/// Store failures are passed through untouched; the repositories never retry
/// or swallow them. The adapter's own error is kept as the source.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Database(#[source] Box<dyn StdError + Send + Sync>),

    #[error("{0} not found")]
    NotFound(String),
}

impl RepositoryError {
    pub fn database(error: impl StdError + Send + Sync + 'static) -> Self {
        RepositoryError::Database(Box::new(error))
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        RepositoryError::NotFound(what.into())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
