//! Configuration for the petclinic data layer

use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Environment variable prefix overriding file values (`PETCLINIC_DATABASE_URL`, ...)
pub const ENV_PREFIX: &str = "PETCLINIC_";

/// Idle and lifetime bound for the in-memory pool connection. Closing that
/// connection discards the database, so it must outlive the process.
const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Data layer configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database URL (`sqlite::memory:`, `sqlite://petclinic.db?mode=rwc`, `postgres://...`)
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Upper bound of the shared connection pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connections kept open while idle
    #[serde(default)]
    pub min_connections: u32,

    /// Timeout for establishing a connection
    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Timeout for acquiring a pooled connection
    #[serde(default = "default_acquire_timeout", with = "humantime_serde")]
    pub acquire_timeout: Duration,

    /// Idle time after which a pooled connection is closed
    #[serde(default = "default_idle_timeout", with = "humantime_serde")]
    pub idle_timeout: Duration,

    /// Age after which a pooled connection is recycled
    #[serde(default = "default_max_lifetime", with = "humantime_serde")]
    pub max_lifetime: Duration,

    /// Log every SQL statement through sqlx
    #[serde(default)]
    pub sqlx_logging: bool,

    /// Create the schema when the data layer starts
    #[serde(default = "default_true")]
    pub migrate_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: 0,
            connect_timeout: default_connect_timeout(),
            acquire_timeout: default_acquire_timeout(),
            idle_timeout: default_idle_timeout(),
            max_lifetime: default_max_lifetime(),
            sqlx_logging: false,
            migrate_on_start: true,
        }
    }
}

impl Config {
    /// Load configuration from an optional YAML file overlaid by `PETCLINIC_*` variables
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Extract configuration from a prepared figment
    pub fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }

    /// In-memory SQLite configuration
    ///
    /// The pool is pinned to one connection that is never reaped: every
    /// SQLite memory connection opens its own database.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            idle_timeout: IN_MEMORY_CONNECTION_LIFETIME,
            max_lifetime: IN_MEMORY_CONNECTION_LIFETIME,
            ..Self::default()
        }
    }
}

fn default_database_url() -> String {
    "sqlite://petclinic.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(8)
}

fn default_acquire_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_idle_timeout() -> Duration {
    Duration::from_secs(10 * 60)
}

fn default_max_lifetime() -> Duration {
    Duration::from_secs(30 * 60)
}

fn default_true() -> bool {
    true
}
