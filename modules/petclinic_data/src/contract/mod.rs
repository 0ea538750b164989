//! Contract layer - public domain values and error types
//!
//! These types are storage-agnostic. ORM rows live in `infra::storage::entity`
//! and are converted by `infra::storage::mapper`.

pub mod error;
pub mod model;

pub use error::{DataError, DataResult};
pub use model::{Owner, Pet, Visit};
