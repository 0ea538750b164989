//! Contract error types for the petclinic data layer
//!
//! Absence is not an error: lookups return `Ok(None)` or an empty stream,
//! and a delete that matched nothing is reported as `Ok(false)` where the
//! operation is conditional.

use thiserror::Error;

/// Result alias used by every data access operation
pub type DataResult<T> = Result<T, DataError>;

/// Data access errors
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    /// Transport, serialization or availability fault raised by the storage
    /// client. The driver error is kept unchanged as the source.
    #[error("storage fault: {0}")]
    Storage(#[from] sea_orm::DbErr),
}

impl DataError {
    /// Underlying driver error
    pub fn db_err(&self) -> &sea_orm::DbErr {
        match self {
            Self::Storage(err) => err,
        }
    }
}
