//! Database configuration - connection string and pool limits
//!
//! Configuration is loaded from environment variables:
//! - `DATABASE_URL`: Postgres connection string (default: postgres://localhost/notes)
//! - `NOTECTL_MAX_CONNECTIONS`: pool size (default: 5)
//! - `NOTECTL_STATEMENT_TIMEOUT_SECS`: per-operation bound (default: 5)
//!
//! The default URL is for local development only and must be overridden
//! in any real deployment.

use std::time::Duration;

/// Local development connection string.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/notes";

/// Kept low; every operation holds a connection for one statement only.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub const DEFAULT_STATEMENT_TIMEOUT_SECS: u64 = 5;

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// Upper bound on a single gateway operation, including connection acquisition
    pub statement_timeout: Duration,
}

impl DatabaseConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = lookup("NOTECTL_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let timeout_secs = lookup("NOTECTL_STATEMENT_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_STATEMENT_TIMEOUT_SECS);

        Self {
            database_url,
            max_connections,
            statement_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
