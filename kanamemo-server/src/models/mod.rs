//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod freq_word;
pub mod post;
pub mod token;
pub mod validation;

pub use freq_word::{FrequentWord, Word};
pub use post::{Post, PostContent};
pub use token::ClientToken;
pub use validation::ValidationError;
