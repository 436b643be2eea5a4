//! notectl-server: HTTP server for notes
//!
//! Every write passes through the same pipeline: markup is stripped,
//! fields are validated, and only then is a single statement issued
//! against the `notes` table.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DatabaseConfig;
pub use db::{Note, NoteRepo, NoteStore, StorageError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{NoteFields, NoteInput, ValidationError, ValidationErrors};
