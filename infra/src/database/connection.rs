//! Database connection pool management

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use ag_shared::DatabaseConfig;

use crate::InfrastructureError;

/// Postgres connection pool wrapper
#[derive(Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new connection pool from configuration
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        info!(
            "Creating database pool with max_connections: {}",
            config.max_connections
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(&config.url)
            .await?;

        Ok(Self { pool })
    }

    /// The underlying SQLx pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply pending SQL migrations from a directory
    pub async fn migrate(&self, dir: impl AsRef<Path>) -> Result<(), InfrastructureError> {
        let migrator = sqlx::migrate::Migrator::new(dir.as_ref()).await?;
        migrator.run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    /// Verify the database is reachable
    pub async fn health_check(&self) -> Result<(), InfrastructureError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
