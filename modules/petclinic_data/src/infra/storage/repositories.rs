//! SeaORM repository implementations

use crate::contract::{DataError, DataResult, Pet, Visit};
use crate::domain::repository::{PetRepository, PetStream, VisitRepository, VisitStream};
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::entity::{pet, visit};

// ===== Pet Repository =====

pub struct SeaOrmPetRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPetRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PetRepository for SeaOrmPetRepository {
    async fn find_all<'a>(&'a self) -> DataResult<PetStream<'a>> {
        let rows = pet::Entity::find().stream(&*self.db).await?;

        Ok(rows.map_ok(Pet::from).map_err(DataError::from).boxed())
    }

    async fn find_by_id(&self, pet_id: Uuid) -> DataResult<Option<Pet>> {
        let result = pet::Entity::find_by_id(pet_id).one(&*self.db).await?;

        Ok(result.map(Pet::from))
    }

    async fn find_all_by_owner_id<'a>(&'a self, owner_id: Uuid) -> DataResult<PetStream<'a>> {
        let rows = pet::Entity::find()
            .filter(pet::Column::OwnerId.eq(owner_id))
            .stream(&*self.db)
            .await?;

        Ok(rows.map_ok(Pet::from).map_err(DataError::from).boxed())
    }

    async fn save(&self, pet: Pet) -> DataResult<Pet> {
        let active: pet::ActiveModel = (&pet).into();

        pet::Entity::insert(active)
            .on_conflict(
                OnConflict::column(pet::Column::PetId)
                    .update_columns([
                        pet::Column::OwnerId,
                        pet::Column::Name,
                        pet::Column::BirthDate,
                        pet::Column::PetType,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await?;

        tracing::debug!(pet_id = %pet.id, owner_id = %pet.owner_id, "Saved pet");
        Ok(pet)
    }

    async fn delete(&self, pet: &Pet) -> DataResult<bool> {
        let result = pet::Entity::delete_by_id(pet.id).exec(&*self.db).await?;

        tracing::debug!(pet_id = %pet.id, rows_affected = result.rows_affected, "Deleted pet");
        Ok(true)
    }

    async fn delete_if_exists(&self, pet: &Pet) -> DataResult<bool> {
        let result = pet::Entity::delete_by_id(pet.id).exec(&*self.db).await?;

        tracing::debug!(pet_id = %pet.id, rows_affected = result.rows_affected, "Deleted pet if exists");
        Ok(result.rows_affected > 0)
    }
}

// ===== Visit Repository =====

pub struct SeaOrmVisitRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmVisitRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VisitRepository for SeaOrmVisitRepository {
    async fn find_all<'a>(&'a self) -> DataResult<VisitStream<'a>> {
        let rows = visit::Entity::find().stream(&*self.db).await?;

        Ok(rows.map_ok(Visit::from).map_err(DataError::from).boxed())
    }

    async fn find_all_for_pet<'a>(&'a self, pet_id: Uuid) -> DataResult<VisitStream<'a>> {
        let rows = visit::Entity::find()
            .filter(visit::Column::PetId.eq(pet_id))
            .order_by_asc(visit::Column::VisitId)
            .stream(&*self.db)
            .await?;

        Ok(rows.map_ok(Visit::from).map_err(DataError::from).boxed())
    }

    async fn find_by_visit_id(&self, visit_id: Uuid) -> DataResult<Option<Visit>> {
        // No index covers visit_id alone: this is a predicate scan over every partition
        let result = visit::Entity::find()
            .filter(visit::Column::VisitId.eq(visit_id))
            .one(&*self.db)
            .await?;

        Ok(result.map(Visit::from))
    }

    async fn save(&self, visit: Visit) -> DataResult<Visit> {
        let active: visit::ActiveModel = (&visit).into();

        visit::Entity::insert(active)
            .on_conflict(
                OnConflict::columns([visit::Column::PetId, visit::Column::VisitId])
                    .update_columns([visit::Column::VisitDate, visit::Column::Description])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await?;

        tracing::debug!(pet_id = %visit.pet_id, visit_id = %visit.visit_id, "Saved visit");
        Ok(visit)
    }

    async fn delete(&self, visit: &Visit) -> DataResult<bool> {
        let result = visit::Entity::delete_by_id((visit.pet_id, visit.visit_id))
            .exec(&*self.db)
            .await?;

        tracing::debug!(
            pet_id = %visit.pet_id,
            visit_id = %visit.visit_id,
            rows_affected = result.rows_affected,
            "Deleted visit"
        );
        Ok(true)
    }

    async fn delete_if_exists(&self, visit: &Visit) -> DataResult<bool> {
        let result = visit::Entity::delete_by_id((visit.pet_id, visit.visit_id))
            .exec(&*self.db)
            .await?;

        tracing::debug!(
            pet_id = %visit.pet_id,
            visit_id = %visit.visit_id,
            rows_affected = result.rows_affected,
            "Deleted visit if exists"
        );
        Ok(result.rows_affected > 0)
    }
}
