//! Frequent word endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use super::StatusResponse;
use crate::db::FreqWordRepo;
use crate::http::error::ApiError;
use crate::http::extractors::RequestToken;
use crate::http::server::AppState;
use crate::models::{FrequentWord, Word};

/// Add word request
#[derive(Deserialize)]
pub struct AddWordRequest {
    pub word: Option<String>,
}

/// GET /freq_words - token's words, newest first
async fn list_words(
    State(state): State<Arc<AppState>>,
    RequestToken(token): RequestToken,
) -> Result<Json<Vec<FrequentWord>>, ApiError> {
    let words = FreqWordRepo::new(&state.pool).list(&token).await?;
    Ok(Json(words))
}

/// POST /freq_words - save a word
async fn add_word(
    State(state): State<Arc<AppState>>,
    RequestToken(token): RequestToken,
    WithRejection(Json(req), _): WithRejection<Json<AddWordRequest>, ApiError>,
) -> Result<Json<StatusResponse>, ApiError> {
    let word = Word::new(req.word.as_deref())?;
    FreqWordRepo::new(&state.pool).create(&token, &word).await?;

    Ok(Json(StatusResponse::success()))
}

/// Frequent word routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/freq_words", get(list_words).post(add_word))
}
