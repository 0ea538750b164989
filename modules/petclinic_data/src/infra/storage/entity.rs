//! SeaORM entities for database tables

/// Pets table entity
pub mod pet {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "petclinic_pet")]
    pub struct Model {
        /// Pet identifier (primary key)
        #[sea_orm(primary_key, auto_increment = false)]
        pub pet_id: Uuid,

        /// Owner reference, served by `idx_petclinic_pet_owner_id`
        pub owner_id: Uuid,

        pub name: String,

        pub birth_date: Date,

        pub pet_type: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Visits table entity, one partition per pet
pub mod visit {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "petclinic_visit_by_pet")]
    pub struct Model {
        /// Pet identifier (partition key)
        #[sea_orm(primary_key, auto_increment = false)]
        pub pet_id: Uuid,

        /// Visit identifier (clustering key)
        #[sea_orm(primary_key, auto_increment = false)]
        pub visit_id: Uuid,

        pub visit_date: Date,

        #[sea_orm(column_type = "Text")]
        pub description: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
