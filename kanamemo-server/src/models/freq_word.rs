//! Frequent words - per-token saved words for quick reuse

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Frequent word record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FrequentWord {
    pub id: i32,
    pub token: String,
    pub word: String,
}

/// Validated frequent word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word(String);

impl Word {
    /// Create a word from an optional request field, rejecting missing or empty input.
    pub fn new(s: Option<&str>) -> Result<Self, ValidationError> {
        match s {
            Some(s) if !s.is_empty() => Ok(Self(s.to_owned())),
            _ => Err(ValidationError::Empty { field: "Word" }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_word() {
        assert_eq!(Word::new(Some("牛乳")).unwrap().as_str(), "牛乳");
        assert_eq!(
            Word::new(Some("")).unwrap_err().to_string(),
            "Word is empty"
        );
        assert!(Word::new(None).is_err());
    }
}
