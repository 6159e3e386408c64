use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;

use crate::config;

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Centralized connection pool manager for the application database.
///
/// Tenancy is row-scoped: every tenant shares one database and all queries
/// carry a tenant_id predicate, so a single lazily-created pool suffices.
pub struct DatabaseManager;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

impl DatabaseManager {
    /// Get the application database pool, creating it on first use.
    pub async fn pool() -> Result<PgPool, DatabaseError> {
        let pool = POOL
            .get_or_try_init(|| async {
                let connection_string = Self::connection_string()?;
                let db_config = &config::config().database;

                let pool = PgPoolOptions::new()
                    .max_connections(db_config.max_connections)
                    .acquire_timeout(Duration::from_secs(db_config.connection_timeout))
                    .connect(&connection_string)
                    .await?;

                info!("Created application database pool");
                Ok::<PgPool, DatabaseError>(pool)
            })
            .await?;

        Ok(pool.clone())
    }

    fn connection_string() -> Result<String, DatabaseError> {
        let base = std::env::var("DATABASE_URL")
            .map_err(|_| DatabaseError::ConfigMissing("DATABASE_URL"))?;

        // Validate eagerly so a malformed URL fails here, not deep in sqlx
        url::Url::parse(&base).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;
        Ok(base)
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check() -> Result<(), DatabaseError> {
        let pool = Self::pool().await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        Ok(())
    }
}
