//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Connections are
//! handed out per gateway operation and returned to the pool when the
//! guard drops.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::{DatabaseConfig, DEFAULT_MAX_CONNECTIONS, DEFAULT_STATEMENT_TIMEOUT_SECS};

/// Create a PostgreSQL connection pool with default limits.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/notes").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(
        database_url,
        DEFAULT_MAX_CONNECTIONS,
        Duration::from_secs(DEFAULT_STATEMENT_TIMEOUT_SECS),
    )
    .await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
/// * `acquire_timeout` - How long a caller may wait for a free connection
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// Create a pool from a [`DatabaseConfig`].
pub async fn create_pool_from_config(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(
        &config.database_url,
        config.max_connections,
        config.statement_timeout,
    )
    .await
}
