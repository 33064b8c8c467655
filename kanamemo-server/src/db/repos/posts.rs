//! Post repository
//!
//! - search: token-scoped substring match over lower-cased content, newest first
//! - create: insert with store-assigned id and timestamp
//! - set_highlight: flag update guarded by id AND token

use sqlx::PgPool;

use super::DbError;
use crate::db::schema::POSTS_TABLE;
use crate::models::{ClientToken, Post, PostContent};
use crate::search;

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search a token's posts for `query` after normalization.
    ///
    /// An empty query returns every post of the token.
    pub async fn search(&self, token: &ClientToken, query: &str) -> Result<Vec<Post>, DbError> {
        let pattern = search::like_pattern(query);
        tracing::debug!(%pattern, "searching posts");

        let posts: Vec<Post> = sqlx::query_as(&format!(
            r#"
            SELECT id, token, content, is_highlight, created_at
            FROM {POSTS_TABLE}
            WHERE token = $1 AND LOWER(content) LIKE LOWER($2)
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(token.as_str())
        .bind(&pattern)
        .fetch_all(self.pool)
        .await
        .inspect_err(|e| tracing::error!("Error searching posts: {}", e))?;

        Ok(posts)
    }

    /// Insert a post for the token.
    pub async fn create(&self, token: &ClientToken, content: &PostContent) -> Result<(), DbError> {
        sqlx::query(&format!(
            "INSERT INTO {POSTS_TABLE} (token, content) VALUES ($1, $2)"
        ))
        .bind(token.as_str())
        .bind(content.as_str())
        .execute(self.pool)
        .await
        .inspect_err(|e| tracing::error!("Error adding post: {}", e))?;

        Ok(())
    }

    /// Set the highlight flag on one of the token's posts.
    ///
    /// Returns the number of rows updated: 0 when the id is unknown or belongs
    /// to another token, which callers do not treat as an error.
    pub async fn set_highlight(
        &self,
        token: &ClientToken,
        id: Option<i32>,
        is_highlight: bool,
    ) -> Result<u64, DbError> {
        let result = sqlx::query(&format!(
            "UPDATE {POSTS_TABLE} SET is_highlight = $1 WHERE id = $2 AND token = $3"
        ))
        .bind(is_highlight)
        .bind(id)
        .bind(token.as_str())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
