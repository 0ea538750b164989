//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{pet, visit};
use crate::contract::{Pet, Visit};
use std::collections::HashSet;

// ===== Pet Conversions =====

impl From<pet::Model> for Pet {
    fn from(entity: pet::Model) -> Self {
        Self {
            id: entity.pet_id,
            owner_id: entity.owner_id,
            name: entity.name,
            birth_date: entity.birth_date,
            pet_type: entity.pet_type,
            visits: HashSet::new(),
        }
    }
}

impl From<&Pet> for pet::ActiveModel {
    fn from(model: &Pet) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            pet_id: Set(model.id),
            owner_id: Set(model.owner_id),
            name: Set(model.name.clone()),
            birth_date: Set(model.birth_date),
            pet_type: Set(model.pet_type.clone()),
        }
    }
}

// ===== Visit Conversions =====

impl From<visit::Model> for Visit {
    fn from(entity: visit::Model) -> Self {
        Self {
            pet_id: entity.pet_id,
            visit_id: entity.visit_id,
            visit_date: entity.visit_date,
            description: entity.description,
        }
    }
}

impl From<&Visit> for visit::ActiveModel {
    fn from(model: &Visit) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            pet_id: Set(model.pet_id),
            visit_id: Set(model.visit_id),
            visit_date: Set(model.visit_date),
            description: Set(model.description.clone()),
        }
    }
}
