//! Database layer - connection pool, schema bootstrap and the note gateway
//!
//! # Design Principles
//!
//! - Connection pool, one pooled connection per operation, one statement per connection
//! - Every operation bounded by a timeout
//! - "Not found" is a value (`None` / `false`), never an error

pub mod pool;
pub mod repos;
pub mod schema;
pub mod store;

pub use pool::{create_pool, create_pool_from_config, create_pool_with_options};
pub use repos::*;
pub use schema::ensure_schema;
pub use store::{MemoryNoteStore, NoteStore};
