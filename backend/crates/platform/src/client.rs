//! Client credential extraction
//!
//! Pulls bearer tokens out of incoming requests.

use axum::http::{HeaderMap, header};

/// Query parameter that may carry the token
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively. Empty tokens are treated as absent.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Extract the token from the `access_token` query parameter
///
/// Tokens are URL-safe base64, so no percent-decoding is applied.
pub fn extract_query_token(query: Option<&str>) -> Option<String> {
    query?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == ACCESS_TOKEN_PARAM && !value.is_empty()).then(|| value.to_string())
    })
}

/// Extract a request token: `Authorization` header first, then query string
pub fn extract_request_token(headers: &HeaderMap, query: Option<&str>) -> Option<String> {
    extract_bearer_token(headers).or_else(|| extract_query_token(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn auth_headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = auth_headers("Bearer abc123");
        assert_eq!(extract_bearer_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_extract_bearer_token_case_insensitive_scheme() {
        let headers = auth_headers("bearer abc123");
        assert_eq!(extract_bearer_token(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_extract_bearer_token_rejects_other_schemes() {
        let headers = auth_headers("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_extract_bearer_token_missing_or_empty() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
        assert_eq!(extract_bearer_token(&auth_headers("Bearer ")), None);
        assert_eq!(extract_bearer_token(&auth_headers("Bearer")), None);
    }

    #[test]
    fn test_extract_query_token() {
        assert_eq!(
            extract_query_token(Some("foo=bar&access_token=xyz")),
            Some("xyz".to_string())
        );
        assert_eq!(extract_query_token(Some("access_token=")), None);
        assert_eq!(extract_query_token(Some("token=xyz")), None);
        assert_eq!(extract_query_token(None), None);
    }

    #[test]
    fn test_header_takes_precedence_over_query() {
        let headers = auth_headers("Bearer from-header");
        assert_eq!(
            extract_request_token(&headers, Some("access_token=from-query")),
            Some("from-header".to_string())
        );
        assert_eq!(
            extract_request_token(&HeaderMap::new(), Some("access_token=from-query")),
            Some("from-query".to_string())
        );
    }
}
