//! Data layer bootstrap: connection, schema and repository wiring

use crate::config::Config;
use crate::domain::{PetRepository, Service, VisitRepository};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::repositories::{SeaOrmPetRepository, SeaOrmVisitRepository};
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use url::Url;

/// Process-wide data layer
///
/// Owns the single shared connection pool; every repository holds a clone
/// of the same `Arc<DatabaseConnection>`.
#[derive(Clone)]
pub struct PetClinicData {
    db: Arc<DatabaseConnection>,
    pets: Arc<dyn PetRepository>,
    visits: Arc<dyn VisitRepository>,
    service: Arc<Service>,
}

impl PetClinicData {
    /// Connect, optionally create the schema, and build the repositories
    pub async fn init(config: &Config) -> Result<Self> {
        let db = connect(config).await?;

        if config.migrate_on_start {
            migrate(&db).await?;
        }

        Ok(Self::from_connection(Arc::new(db)))
    }

    /// Build the repositories over an existing connection
    pub fn from_connection(db: Arc<DatabaseConnection>) -> Self {
        let pets: Arc<dyn PetRepository> = Arc::new(SeaOrmPetRepository::new(db.clone()));
        let visits: Arc<dyn VisitRepository> = Arc::new(SeaOrmVisitRepository::new(db.clone()));
        let service = Arc::new(Service::new(pets.clone(), visits.clone()));

        Self {
            db,
            pets,
            visits,
            service,
        }
    }

    pub fn connection(&self) -> &Arc<DatabaseConnection> {
        &self.db
    }

    pub fn pets(&self) -> Arc<dyn PetRepository> {
        self.pets.clone()
    }

    pub fn visits(&self) -> Arc<dyn VisitRepository> {
        self.visits.clone()
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }
}

/// Pool options derived from `config`
pub fn connect_options(config: &Config) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .sqlx_logging(config.sqlx_logging);
    options
}

/// Open the shared connection pool described by `config`
pub async fn connect(config: &Config) -> Result<DatabaseConnection> {
    let db = Database::connect(connect_options(config))
        .await
        .with_context(|| format!("Failed to connect to {}", redact(&config.database_url)))?;

    tracing::info!(
        backend = ?db.get_database_backend(),
        max_connections = config.max_connections,
        "Connected to petclinic database"
    );
    Ok(db)
}

/// Create the petclinic tables if they do not exist
///
/// Run once at startup, before any repository is used.
pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
    Migrator::up(db, None)
        .await
        .context("Failed to apply petclinic schema migrations")?;

    tracing::info!("Petclinic schema migrations completed");
    Ok(())
}

/// Strip credentials from a database URL before it reaches logs or errors
///
/// URLs without an authority (`sqlite::memory:`) carry no credentials and
/// are returned as given.
fn redact(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) if url.has_host() => {
            // Both setters only fail for hostless URLs
            let _ = url.set_password(None);
            let _ = url.set_username("");
            url.to_string()
        }
        _ => raw.to_string(),
    }
}
