//! Database layer - connection pool, schema bootstrap and repositories
//!
//! Every repository method is a single parameterized statement and every
//! statement filters by the client token.

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::ensure_tables;
