//! Test utilities backed by testcontainers
//!
//! Each test gets its own PostgreSQL container; it is removed when the
//! returned `TestDatabase` is dropped.

use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

use crate::config::DatabaseConfig;

/// A migrated database and the container serving it
pub struct TestDatabase {
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

/// Start PostgreSQL, connect and run the embedded migrations
pub async fn start_postgres() -> TestDatabase {
    let container = Postgres::default()
        .with_user("judge")
        .with_password("judge_test")
        .with_db_name("judge_test")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    let config = DatabaseConfig {
        url: format!("postgres://judge:judge_test@{}:{}/judge_test", host, port),
        max_connections: 5,
    };

    let pool = super::create_pool(&config)
        .await
        .expect("Failed to connect to test database");
    super::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    TestDatabase {
        pool,
        _container: container,
    }
}
