//! Domain service - owner / pet / visit composition

use super::repository::{PetRepository, VisitRepository};
use crate::contract::{DataResult, Owner, Pet};
use futures::TryStreamExt;
use std::sync::Arc;
use uuid::Uuid;

/// Read-side composition over the pet and visit repositories
///
/// The owner -> pets -> visits graph built here is request scoped; nothing
/// is cached between calls.
pub struct Service {
    pet_repo: Arc<dyn PetRepository>,
    visit_repo: Arc<dyn VisitRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(pet_repo: Arc<dyn PetRepository>, visit_repo: Arc<dyn VisitRepository>) -> Self {
        Self {
            pet_repo,
            visit_repo,
        }
    }

    /// Load an owner with all of its pets and their visits
    ///
    /// Replaces `owner.pets` with the stored pets of `owner.id`.
    #[tracing::instrument(skip(self, owner), fields(owner_id = %owner.id))]
    pub async fn load_owner(&self, mut owner: Owner) -> DataResult<Owner> {
        owner.pets = self
            .pet_repo
            .find_all_by_owner_id(owner.id)
            .await?
            .try_collect()
            .await?;

        self.visit_repo.populate_visits_for_owner(owner).await
    }

    /// Find a pet and attach its visits
    #[tracing::instrument(skip(self))]
    pub async fn find_pet_with_visits(&self, pet_id: Uuid) -> DataResult<Option<Pet>> {
        match self.pet_repo.find_by_id(pet_id).await? {
            Some(pet) => Ok(Some(self.visit_repo.populate_visits_for_pet(pet).await?)),
            None => {
                tracing::debug!("Pet not found");
                Ok(None)
            }
        }
    }
}
