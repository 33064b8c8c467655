//! Custom Axum extractors

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::Uri;
use axum_extra::extract::CookieJar;

use super::error::ApiError;
use crate::models::ClientToken;

/// Name of the query parameter and cookie carrying the client token
pub const TOKEN_KEY: &str = "token";

/// Query string as ordered key/value pairs.
///
/// Repeated keys are kept rather than rejected; lookups return the first
/// occurrence.
#[derive(Debug, Default)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    pub fn from_uri(uri: &Uri) -> Result<Self, ApiError> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)?;
        Ok(Self(pairs))
    }

    /// First value for `key`, if present
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_uri(&parts.uri)
    }
}

/// Resolve the client token for a request.
///
/// Order: `?token=` query parameter, then the `token` cookie, then a freshly
/// generated token. Empty values fall through to the next source.
pub struct RequestToken(pub ClientToken);

impl<S> FromRequestParts<S> for RequestToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = QueryPairs::from_uri(&parts.uri)?;
        if let Some(raw) = query.first(TOKEN_KEY) {
            if let Some(token) = ClientToken::parse(raw)? {
                return Ok(Self(token));
            }
        }

        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get(TOKEN_KEY) {
            if let Some(token) = ClientToken::parse(cookie.value())? {
                return Ok(Self(token));
            }
        }

        tracing::debug!("no client token supplied, generating one");
        Ok(Self(ClientToken::generate()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, Request};

    async fn resolve(uri: &str, cookie: Option<&str>) -> Result<ClientToken, ApiError> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        RequestToken::from_request_parts(&mut parts, &())
            .await
            .map(|RequestToken(t)| t)
    }

    #[tokio::test]
    async fn query_parameter_wins() {
        let token = resolve("/search?q=x&token=fromquery", Some("token=fromcookie"))
            .await
            .unwrap();
        assert_eq!(token.as_str(), "fromquery");
    }

    #[tokio::test]
    async fn cookie_used_without_query() {
        let token = resolve("/search?q=x", Some("other=1; token=fromcookie"))
            .await
            .unwrap();
        assert_eq!(token.as_str(), "fromcookie");
    }

    #[tokio::test]
    async fn empty_query_token_falls_back_to_cookie() {
        let token = resolve("/search?token=", Some("token=fromcookie"))
            .await
            .unwrap();
        assert_eq!(token.as_str(), "fromcookie");
    }

    #[tokio::test]
    async fn repeated_query_token_takes_first() {
        let token = resolve("/search?token=a&token=b", None).await.unwrap();
        assert_eq!(token.as_str(), "a");
    }

    #[tokio::test]
    async fn empty_first_token_falls_back_to_cookie() {
        let token = resolve("/search?token=&token=b", Some("token=fromcookie"))
            .await
            .unwrap();
        assert_eq!(token.as_str(), "fromcookie");
    }

    #[test]
    fn query_pairs_keep_order_and_decode() {
        let uri: Uri = "/search?q=%E3%83%A1%E3%83%A2&q=other&token=t".parse().unwrap();
        let query = QueryPairs::from_uri(&uri).unwrap();
        assert_eq!(query.first("q"), Some("メモ"));
        assert_eq!(query.first("token"), Some("t"));
        assert_eq!(query.first("missing"), None);

        let uri: Uri = "/search".parse().unwrap();
        assert_eq!(QueryPairs::from_uri(&uri).unwrap().first("q"), None);
    }

    #[tokio::test]
    async fn generates_when_absent() {
        let token = resolve("/freq_words", None).await.unwrap();
        assert_eq!(token.as_str().len(), 64);
    }

    #[tokio::test]
    async fn oversized_token_is_rejected() {
        let uri = format!("/freq_words?token={}", "a".repeat(65));
        let err = resolve(&uri, None).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
