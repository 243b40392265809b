//! Database module
//!
//! This module handles database connections, migrations, and repositories.
//! The database is only used when persistent history is configured.

pub mod connection;
pub mod repositories;
#[cfg(test)]
pub(crate) mod test_utils;

use sqlx::PgPool;

pub use connection::*;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
