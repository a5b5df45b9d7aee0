use thiserror::Error;

/// Failure of a store operation. A missing row is never an error: lookups
/// return `Ok(None)` and updates `Ok(false)`, so callers can tell "no such
/// user" apart from "database unreachable".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Password(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
