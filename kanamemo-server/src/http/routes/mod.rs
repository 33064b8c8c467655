//! Route handlers organized by resource

pub mod freq_words;
pub mod health;
pub mod pages;
pub mod posts;

use serde::Serialize;

/// `{"status": "success"}` body returned by every write endpoint
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}
