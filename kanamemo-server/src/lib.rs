//! kanamemo-server: token-scoped memo backend
//!
//! Clients post short entries under an anonymous token, search them with
//! case/width/kana-folded substring matching, flag highlights and keep a
//! list of frequently used words.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod search;

pub use config::ServerConfig;
pub use db::{create_pool, create_pool_with_options, ensure_tables, DbError};
pub use http::{build_router, run_server, ApiError, ServerError};
