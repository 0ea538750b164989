//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{DataResult, Owner, Pet, Visit};
use async_trait::async_trait;
use futures::future::try_join_all;
use futures::stream::BoxStream;
use futures::TryStreamExt;
use std::collections::HashSet;
use uuid::Uuid;

/// Lazily fetched pets. Dropping the stream stops row fetching.
pub type PetStream<'a> = BoxStream<'a, DataResult<Pet>>;

/// Lazily fetched visits. Dropping the stream stops row fetching.
pub type VisitStream<'a> = BoxStream<'a, DataResult<Visit>>;

/// Repository for pets
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Stream every pet, unordered
    async fn find_all<'a>(&'a self) -> DataResult<PetStream<'a>>;

    /// Find a pet by identifier
    async fn find_by_id(&self, pet_id: Uuid) -> DataResult<Option<Pet>>;

    /// Stream the pets referencing an owner
    async fn find_all_by_owner_id<'a>(&'a self, owner_id: Uuid) -> DataResult<PetStream<'a>>;

    /// Insert or replace a pet keyed by `pet.id` (last writer wins)
    ///
    /// Returns the pet that was given; `visits` are not persisted.
    async fn save(&self, pet: Pet) -> DataResult<Pet>;

    /// Delete a pet by key
    ///
    /// Unconditional: reports `true` once the store acknowledged the delete,
    /// whether or not a row existed.
    async fn delete(&self, pet: &Pet) -> DataResult<bool>;

    /// Delete a pet only if its row exists
    ///
    /// Reports `false` when nothing matched.
    async fn delete_if_exists(&self, pet: &Pet) -> DataResult<bool>;
}

/// Repository for visits, partitioned by pet and clustered by visit id
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Stream every visit across all pets
    async fn find_all<'a>(&'a self) -> DataResult<VisitStream<'a>>;

    /// Stream the visits of one pet in `visit_id` order (single partition read)
    async fn find_all_for_pet<'a>(&'a self, pet_id: Uuid) -> DataResult<VisitStream<'a>>;

    /// Find a visit by its clustering key alone
    ///
    /// Scans every partition. Prefer `find_all_for_pet` when the pet is known.
    async fn find_by_visit_id(&self, visit_id: Uuid) -> DataResult<Option<Visit>>;

    /// Insert or replace a visit keyed by `(pet_id, visit_id)` (last writer wins)
    async fn save(&self, visit: Visit) -> DataResult<Visit>;

    /// Delete a visit by composite key; same applied semantics as `PetRepository::delete`
    async fn delete(&self, visit: &Visit) -> DataResult<bool>;

    /// Delete a visit only if its row exists
    async fn delete_if_exists(&self, visit: &Visit) -> DataResult<bool>;

    /// Replace `pet.visits` with the visits stored under `pet.id`
    ///
    /// Visit ids are unique within a partition, so the set never drops rows.
    async fn populate_visits_for_pet(&self, mut pet: Pet) -> DataResult<Pet> {
        let visits: HashSet<Visit> = self.find_all_for_pet(pet.id).await?.try_collect().await?;
        tracing::debug!(pet_id = %pet.id, visits = visits.len(), "Populated pet visits");
        pet.visits = visits;
        Ok(pet)
    }

    /// Populate the visits of every pet of an owner
    ///
    /// Per-pet reads run concurrently and may finish in any order. Returns
    /// only once all of them completed; pet order is preserved. The first
    /// fault aborts the remaining reads.
    async fn populate_visits_for_owner(&self, mut owner: Owner) -> DataResult<Owner> {
        let pets = std::mem::take(&mut owner.pets);
        owner.pets = try_join_all(pets.into_iter().map(|pet| self.populate_visits_for_pet(pet)))
            .await?;
        tracing::debug!(owner_id = %owner.id, pets = owner.pets.len(), "Populated owner visits");
        Ok(owner)
    }
}
