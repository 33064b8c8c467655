//! Client token - opaque per-browser identifier that partitions all rows
//!
//! Tokens are bearer values: whoever presents one reads and writes that
//! token's rows. No verification, expiry or rotation is performed.

use rand::RngCore;

use super::ValidationError;

/// Matches the `VARCHAR(64)` token columns (counted in characters)
pub const MAX_TOKEN_LEN: usize = 64;

/// Number of random bytes in a generated token (rendered as 64 hex chars)
const TOKEN_BYTES: usize = 32;

/// Client token used to scope every query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientToken(String);

impl ClientToken {
    /// Wrap a client-supplied token.
    ///
    /// Returns `Ok(None)` for empty input so callers can fall through to the
    /// next token source.
    pub fn parse(s: &str) -> Result<Option<Self>, ValidationError> {
        if s.is_empty() {
            return Ok(None);
        }

        if s.chars().count() > MAX_TOKEN_LEN {
            return Err(ValidationError::TooLong {
                field: "token",
                max: MAX_TOKEN_LEN,
            });
        }

        Ok(Some(Self(s.to_owned())))
    }

    /// Generate a fresh 256-bit token as lowercase hex.
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ClientToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
