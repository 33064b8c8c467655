//! Posts - short text entries owned by a client token

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Post record as stored and returned by `/search`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i32,
    pub token: String,
    pub content: String,
    pub is_highlight: bool,
    pub created_at: NaiveDateTime,
}

/// Validated post content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    /// Create post content from an optional request field.
    ///
    /// Missing and empty content are both rejected. Whitespace is kept as-is.
    ///
    /// # Example
    /// ```
    /// use kanamemo_server::models::PostContent;
    ///
    /// assert!(PostContent::new(Some("買い物リスト")).is_ok());
    /// assert!(PostContent::new(Some("")).is_err());
    /// assert!(PostContent::new(None).is_err());
    /// ```
    pub fn new(s: Option<&str>) -> Result<Self, ValidationError> {
        match s {
            Some(s) if !s.is_empty() => Ok(Self(s.to_owned())),
            _ => Err(ValidationError::Empty { field: "Content" }),
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
    fn accepts_non_empty() {
        let content = PostContent::new(Some("メモ")).unwrap();
        assert_eq!(content.as_str(), "メモ");
    }

    #[test]
    fn keeps_whitespace_only_content() {
        assert!(PostContent::new(Some("   ")).is_ok());
    }

    #[test]
    fn rejects_missing_and_empty() {
        let err = PostContent::new(Some("")).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "Content" });
        assert!(PostContent::new(None).is_err());
    }
}
