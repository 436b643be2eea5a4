//! HTTP server command for the notes API
//!
//! Connects to Postgres, bootstraps the notes table and serves until
//! shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use notectl_server::config::{
    DatabaseConfig, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS, DEFAULT_STATEMENT_TIMEOUT_SECS,
};
use notectl_server::db::{create_pool_from_config, ensure_schema, NoteRepo};
use notectl_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "NOTECTL_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (the default is for local development only)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, env = "NOTECTL_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Upper bound in seconds on any single storage operation
    #[arg(
        long,
        env = "NOTECTL_STATEMENT_TIMEOUT_SECS",
        default_value_t = DEFAULT_STATEMENT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub statement_timeout_secs: u64,
}

impl ServeArgs {
    fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            database_url: self.database_url.clone(),
            max_connections: self.max_connections.max(1),
            statement_timeout: Duration::from_secs(self.statement_timeout_secs),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.database_config();
    if db_config.database_url == DEFAULT_DATABASE_URL {
        tracing::warn!("DATABASE_URL not set, using local development default");
    }

    tracing::info!(
        bind = %args.bind,
        max_connections = db_config.max_connections,
        statement_timeout = ?db_config.statement_timeout,
        "Starting notectl server"
    );

    // Create database pool
    let pool = create_pool_from_config(&db_config)
        .await
        .context("Failed to create database pool")?;

    ensure_schema(&pool)
        .await
        .context("Failed to create notes table")?;

    let store = NoteRepo::new(pool).with_timeout(db_config.statement_timeout);

    // Configure server
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(Arc::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: ServeArgs,
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = Wrapper::parse_from([
            "notectl",
            "--bind",
            "0.0.0.0:8080",
            "--database-url",
            "postgres://db/notes",
            "--max-connections",
            "12",
            "--statement-timeout-secs",
            "3",
        ]);
        let config = parsed.args.database_config();

        assert_eq!(parsed.args.bind.port(), 8080);
        assert_eq!(config.database_url, "postgres://db/notes");
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.statement_timeout, Duration::from_secs(3));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let parsed = Wrapper::try_parse_from(["notectl", "--statement-timeout-secs", "0"]);
        assert!(parsed.is_err());
    }
}
