//! Schema bootstrap for the notes table
//!
//! Idempotent: safe to run on every startup. There are no versions and no
//! down steps; the table shape is fixed.

use sqlx::PgPool;

/// DDL for the `notes` table.
///
/// SERIAL ids come from a sequence and are never handed out twice, even
/// after the row is deleted.
pub const NOTES_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id SERIAL PRIMARY KEY,
    datetime TEXT NOT NULL,
    title VARCHAR(255) NOT NULL CHECK (char_length(title) >= 1),
    text TEXT NOT NULL
)
"#;

/// Create the notes table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring notes schema...");

    sqlx::query(NOTES_TABLE_DDL).execute(pool).await?;

    tracing::info!("Notes schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_matches_gateway_columns() {
        for column in ["id SERIAL PRIMARY KEY", "datetime", "title VARCHAR(255)", "text TEXT"] {
            assert!(NOTES_TABLE_DDL.contains(column), "missing {column}");
        }
        assert!(NOTES_TABLE_DDL.contains("IF NOT EXISTS"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_schema_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");

        ensure_schema(&pool).await.expect("first run");
        ensure_schema(&pool).await.expect("second run");
    }
}
