use crate::config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;

pub mod records;
pub mod user_repo;

pub type DbPool = Pool<Postgres>;

/// Builds the connection pool. Connections are opened on first use, so an
/// unreachable database surfaces through the startup readiness check rather
/// than here.
///
/// # Errors
/// Returns `sqlx::Error` if the connection URL cannot be parsed.
pub fn init_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy(&config.url)
}
