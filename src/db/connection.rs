//! Database connection management

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{config::DatabaseConfig, db::repositories::PgHistoryStore};

/// Create a new database connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Connect, migrate and hand back the persistent history store
pub async fn connect_history_store(config: &DatabaseConfig) -> anyhow::Result<PgHistoryStore> {
    tracing::info!("Connecting to database...");
    let pool = create_pool(config).await?;

    tracing::info!("Running database migrations...");
    super::run_migrations(&pool).await?;

    Ok(PgHistoryStore::new(pool))
}
