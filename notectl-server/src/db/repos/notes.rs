//! Note repository - the Postgres gateway
//!
//! One logical operation = one pooled connection = one statement:
//! - create: INSERT ... RETURNING (server-assigned id comes back in the row)
//! - read_all: SELECT ordered by id
//! - read_one: SELECT, absent row is `None`
//! - update: UPDATE ... RETURNING, no matching row is `None`
//! - delete: DELETE, reports whether a row was removed

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::config::DEFAULT_STATEMENT_TIMEOUT_SECS;
use crate::db::store::NoteStore;
use crate::models::NoteFields;

/// Note record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Note {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub datetime: String,
}

/// Storage fault: connection, execution, or timeout.
///
/// Never produced for a missing row.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{operation} timed out after {elapsed:?}")]
    Timeout {
        operation: &'static str,
        elapsed: Duration,
    },
}

const INSERT_NOTE: &str = r#"
    INSERT INTO notes (datetime, title, text)
    VALUES ($1, $2, $3)
    RETURNING id, title, text, datetime
"#;

const SELECT_ALL_NOTES: &str = r#"
    SELECT id, title, text, datetime
    FROM notes
    ORDER BY id ASC
"#;

const SELECT_NOTE: &str = r#"
    SELECT id, title, text, datetime
    FROM notes
    WHERE id = $1
"#;

const UPDATE_NOTE: &str = r#"
    UPDATE notes
    SET datetime = $1, title = $2, text = $3
    WHERE id = $4
    RETURNING id, title, text, datetime
"#;

const DELETE_NOTE: &str = "DELETE FROM notes WHERE id = $1";

const PING: &str = "SELECT 1";

/// Note repository
#[derive(Debug, Clone)]
pub struct NoteRepo {
    pool: PgPool,
    timeout: Duration,
}

impl NoteRepo {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            timeout: Duration::from_secs(DEFAULT_STATEMENT_TIMEOUT_SECS),
        }
    }

    /// Bound every operation (acquire + statement) by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run one operation under the timeout.
    ///
    /// The connection guard lives inside `op`, so it is dropped (returned
    /// to the pool) whether the statement succeeds, fails, or is cut off.
    async fn bounded<T, F>(&self, operation: &'static str, op: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.timeout, op).await {
            Ok(result) => result.map_err(StorageError::from),
            Err(_) => Err(StorageError::Timeout {
                operation,
                elapsed: self.timeout,
            }),
        }
    }
}

#[async_trait]
impl NoteStore for NoteRepo {
    async fn create(&self, fields: &NoteFields) -> Result<Note, StorageError> {
        let note = self
            .bounded("create", async {
                let mut conn = self.pool.acquire().await?;
                let note: Note = sqlx::query_as(INSERT_NOTE)
                    .bind(fields.datetime())
                    .bind(fields.title())
                    .bind(fields.text())
                    .fetch_one(&mut *conn)
                    .await?;
                Ok::<_, sqlx::Error>(note)
            })
            .await?;

        tracing::debug!(id = note.id, "inserted note");
        Ok(note)
    }

    async fn read_all(&self) -> Result<Vec<Note>, StorageError> {
        self.bounded("read_all", async {
            let mut conn = self.pool.acquire().await?;
            let notes: Vec<Note> = sqlx::query_as(SELECT_ALL_NOTES)
                .fetch_all(&mut *conn)
                .await?;
            Ok::<_, sqlx::Error>(notes)
        })
        .await
    }

    async fn read_one(&self, id: i32) -> Result<Option<Note>, StorageError> {
        self.bounded("read_one", async {
            let mut conn = self.pool.acquire().await?;
            let note: Option<Note> = sqlx::query_as(SELECT_NOTE)
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;
            Ok::<_, sqlx::Error>(note)
        })
        .await
    }

    async fn update(&self, id: i32, fields: &NoteFields) -> Result<Option<Note>, StorageError> {
        let note = self
            .bounded("update", async {
                let mut conn = self.pool.acquire().await?;
                let note: Option<Note> = sqlx::query_as(UPDATE_NOTE)
                    .bind(fields.datetime())
                    .bind(fields.title())
                    .bind(fields.text())
                    .bind(id)
                    .fetch_optional(&mut *conn)
                    .await?;
                Ok::<_, sqlx::Error>(note)
            })
            .await?;

        tracing::debug!(id, found = note.is_some(), "updated note");
        Ok(note)
    }

    async fn delete(&self, id: i32) -> Result<bool, StorageError> {
        let removed = self
            .bounded("delete", async {
                let mut conn = self.pool.acquire().await?;
                let result = sqlx::query(DELETE_NOTE)
                    .bind(id)
                    .execute(&mut *conn)
                    .await?;
                Ok::<_, sqlx::Error>(result.rows_affected() > 0)
            })
            .await?;

        tracing::debug!(id, removed, "deleted note");
        Ok(removed)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.bounded("ping", async {
            let mut conn = self.pool.acquire().await?;
            sqlx::query(PING).execute(&mut *conn).await?;
            Ok::<_, sqlx::Error>(())
        })
        .await
    }
}
