//! PetClinic Data Module
//!
//! Data access for pets and visits over a shared SeaORM connection, plus the
//! read-side composition that attaches visits to pets and pets to owners.
//! Visits are stored one partition per pet, clustered by visit id.

// Public exports
pub mod contract;
pub use contract::{DataError, DataResult, Owner, Pet, Visit};

pub mod config;
pub use config::Config;

pub mod domain;
pub use domain::{PetRepository, PetStream, Service, VisitRepository, VisitStream};

pub mod module;
pub use module::{connect, connect_options, migrate, PetClinicData};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod infra;
