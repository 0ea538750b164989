//! Contract models for the petclinic data layer
//!
//! NO serde derives - these are pure domain models.

use chrono::NaiveDate;
use std::collections::HashSet;
use uuid::Uuid;

/// A visit of one pet to the clinic
///
/// Identified by `(pet_id, visit_id)`. `pet_id` is the partition key and
/// `visit_id` the clustering key of the visits table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Visit {
    /// Owning pet (partition key)
    pub pet_id: Uuid,
    /// Visit identifier (clustering key)
    pub visit_id: Uuid,
    /// Day of the visit
    pub visit_date: NaiveDate,
    /// Free-text description
    pub description: String,
}

impl Visit {
    /// Create a visit with a fresh identifier for the given pet
    pub fn new(pet_id: Uuid, visit_date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            pet_id,
            visit_id: Uuid::new_v4(),
            visit_date,
            description: description.into(),
        }
    }
}

/// A pet registered at the clinic
///
/// `visits` is never persisted with the pet row; it is attached at read time
/// by `VisitRepository::populate_visits_for_pet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    /// Pet identifier (primary key)
    pub id: Uuid,
    /// Owner reference
    pub owner_id: Uuid,
    /// Pet name
    pub name: String,
    /// Birth date
    pub birth_date: NaiveDate,
    /// Pet type (cat, dog, ...)
    pub pet_type: String,
    /// Visits attached at read time
    pub visits: HashSet<Visit>,
}

impl Pet {
    /// Create a pet with a fresh identifier and no visits attached
    pub fn new(
        owner_id: Uuid,
        name: impl Into<String>,
        birth_date: NaiveDate,
        pet_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.into(),
            birth_date,
            pet_type: pet_type.into(),
            visits: HashSet::new(),
        }
    }
}

/// Pet owner aggregate
///
/// Not persisted by this layer. Request-scoped composition root for the
/// owner -> pets -> visits view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Owner {
    /// Owner identifier, referenced by `Pet::owner_id`
    pub id: Uuid,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Street address
    pub address: String,
    /// City of residence
    pub city: String,
    /// Contact phone number, stored as entered
    pub telephone: String,
    /// Pets loaded for this owner, in the order the store returned them
    pub pets: Vec<Pet>,
}

impl Owner {
    /// Create an owner with no pets attached
    pub fn new(id: Uuid, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }
}
