//! Domain layer - repository contracts and composition

pub mod repository;
pub mod service;

pub use repository::{PetRepository, PetStream, VisitRepository, VisitStream};
pub use service::Service;
