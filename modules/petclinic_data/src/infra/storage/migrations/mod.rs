//! Schema bootstrap for the petclinic tables
//!
//! Every statement is `IF NOT EXISTS`, so running the migrator against an
//! already provisioned database is a no-op.

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241015_000001_create_petclinic_pet::Migration),
            Box::new(m20241015_000002_create_petclinic_visit_by_pet::Migration),
        ]
    }
}

mod m20241015_000001_create_petclinic_pet {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20241015_000001_create_petclinic_pet"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PetclinicPet::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PetclinicPet::PetId)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(PetclinicPet::OwnerId).uuid().not_null())
                        .col(ColumnDef::new(PetclinicPet::Name).text().not_null())
                        .col(ColumnDef::new(PetclinicPet::BirthDate).date().not_null())
                        .col(ColumnDef::new(PetclinicPet::PetType).text().not_null())
                        .to_owned(),
                )
                .await?;

            // Secondary lookup by owner
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_petclinic_pet_owner_id")
                        .table(PetclinicPet::Table)
                        .col(PetclinicPet::OwnerId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PetclinicPet::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PetclinicPet {
        Table,
        PetId,
        OwnerId,
        Name,
        BirthDate,
        PetType,
    }
}

mod m20241015_000002_create_petclinic_visit_by_pet {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20241015_000002_create_petclinic_visit_by_pet"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        /// CREATE TABLE IF NOT EXISTS petclinic_visit_by_pet (
        ///  pet_id      uuid,
        ///  visit_id    uuid,
        ///  visit_date  date,
        ///  description text,
        ///  PRIMARY KEY ((pet_id), visit_id));
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PetclinicVisitByPet::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(PetclinicVisitByPet::PetId).uuid().not_null())
                        .col(ColumnDef::new(PetclinicVisitByPet::VisitId).uuid().not_null())
                        .col(ColumnDef::new(PetclinicVisitByPet::VisitDate).date().not_null())
                        .col(ColumnDef::new(PetclinicVisitByPet::Description).text().not_null())
                        .primary_key(
                            Index::create()
                                .col(PetclinicVisitByPet::PetId)
                                .col(PetclinicVisitByPet::VisitId),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PetclinicVisitByPet::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PetclinicVisitByPet {
        Table,
        PetId,
        VisitId,
        VisitDate,
        Description,
    }
}
