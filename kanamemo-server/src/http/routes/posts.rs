//! Post endpoints - search, create, highlight

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use super::StatusResponse;
use crate::db::PostRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{QueryPairs, RequestToken};
use crate::http::server::AppState;
use crate::models::{Post, PostContent};

/// Create post request
#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub content: Option<String>,
}

/// Highlight toggle request
#[derive(Deserialize)]
pub struct HighlightRequest {
    pub id: Option<i32>,
    pub is_highlight: Option<bool>,
}

/// GET /search?q= - token's posts matching the normalized query, newest first
async fn search(
    State(state): State<Arc<AppState>>,
    RequestToken(token): RequestToken,
    query: QueryPairs,
) -> Result<Json<Vec<Post>>, ApiError> {
    let q = query.first("q").unwrap_or_default();
    let posts = PostRepo::new(&state.pool).search(&token, q).await?;
    Ok(Json(posts))
}

/// POST /post - add a post
async fn create_post(
    State(state): State<Arc<AppState>>,
    RequestToken(token): RequestToken,
    WithRejection(Json(req), _): WithRejection<Json<CreatePostRequest>, ApiError>,
) -> Result<Json<StatusResponse>, ApiError> {
    let content = PostContent::new(req.content.as_deref())?;
    PostRepo::new(&state.pool).create(&token, &content).await?;

    Ok(Json(StatusResponse::success()))
}

/// POST /highlight - set or clear the highlight flag on one of the token's posts
async fn highlight(
    State(state): State<Arc<AppState>>,
    RequestToken(token): RequestToken,
    WithRejection(Json(req), _): WithRejection<Json<HighlightRequest>, ApiError>,
) -> Result<Json<StatusResponse>, ApiError> {
    let is_highlight = req.is_highlight.unwrap_or(false);
    let updated = PostRepo::new(&state.pool)
        .set_highlight(&token, req.id, is_highlight)
        .await?;
    tracing::debug!(id = ?req.id, is_highlight, updated, "highlight toggled");

    Ok(Json(StatusResponse::success()))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search", get(search))
        .route("/post", post(create_post))
        .route("/highlight", post(highlight))
}
