//! Table bootstrap - creates both tables at startup if absent

use sqlx::PgPool;

use super::DbError;

/// Posts table name
pub const POSTS_TABLE: &str = "posts_2b6a83";

/// Frequent words table name
pub const FREQ_WORDS_TABLE: &str = "freq_words_7bf883";

/// Create the posts and frequent-word tables (and their token indexes) if missing.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring tables exist...");

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {POSTS_TABLE} (
            id SERIAL PRIMARY KEY,
            token VARCHAR(64) NOT NULL,
            content TEXT NOT NULL,
            is_highlight BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#
    ))
    .execute(pool)
    .await
    .inspect_err(|e| tracing::error!("Error creating posts table: {}", e))?;

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {FREQ_WORDS_TABLE} (
            id SERIAL PRIMARY KEY,
            token VARCHAR(64) NOT NULL,
            word TEXT NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .inspect_err(|e| tracing::error!("Error creating freq_words table: {}", e))?;

    create_indexes(pool).await?;

    tracing::info!("Tables ready");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS idx_{POSTS_TABLE}_token ON {POSTS_TABLE}(token, created_at DESC)"
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS idx_{FREQ_WORDS_TABLE}_token ON {FREQ_WORDS_TABLE}(token)"
    ))
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_tables_is_repeatable() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");

        ensure_tables(&pool).await.expect("first run");
        ensure_tables(&pool).await.expect("second run");
    }
}
