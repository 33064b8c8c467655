//! Repository implementations for database access
//!
//! Each repository borrows the pool and takes the client token as its first
//! argument. There is no way to reach a row without naming its token.

pub mod freq_words;
pub mod posts;

pub use freq_words::FreqWordRepo;
pub use posts::PostRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
}
