//! Frequent word repository

use sqlx::PgPool;

use super::DbError;
use crate::db::schema::FREQ_WORDS_TABLE;
use crate::models::{ClientToken, FrequentWord, Word};

/// Frequent word repository
pub struct FreqWordRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> FreqWordRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the token's words, most recently added first.
    pub async fn list(&self, token: &ClientToken) -> Result<Vec<FrequentWord>, DbError> {
        let words: Vec<FrequentWord> = sqlx::query_as(&format!(
            "SELECT id, token, word FROM {FREQ_WORDS_TABLE} WHERE token = $1 ORDER BY id DESC"
        ))
        .bind(token.as_str())
        .fetch_all(self.pool)
        .await?;

        Ok(words)
    }

    pub async fn create(&self, token: &ClientToken, word: &Word) -> Result<(), DbError> {
        sqlx::query(&format!(
            "INSERT INTO {FREQ_WORDS_TABLE} (token, word) VALUES ($1, $2)"
        ))
        .bind(token.as_str())
        .bind(word.as_str())
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
