//! Token Middleware
//!
//! Pulls the session token off the request before routing: the
//! `Authorization: Bearer` header first, then the `access_token` query
//! parameter.

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use std::convert::Infallible;

use platform::client::extract_request_token;

/// Token presented by the client, if any
#[derive(Debug, Clone, Default)]
pub struct RequestToken(pub Option<String>);

impl RequestToken {
    fn from_parts(parts: &Parts) -> Self {
        Self(extract_request_token(&parts.headers, parts.uri.query()))
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for RequestToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(token) = parts.extensions.get::<RequestToken>() {
            return Ok(token.clone());
        }
        Ok(Self::from_parts(parts))
    }
}

/// Attach the parsed [`RequestToken`] to the request extensions
pub async fn parse_request_token(req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();
    let token = RequestToken::from_parts(&parts);
    parts.extensions.insert(token);

    next.run(Request::from_parts(parts, body)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::AUTHORIZATION;

    async fn extract(req: axum::http::Request<Body>) -> RequestToken {
        let (mut parts, _) = req.into_parts();
        RequestToken::from_request_parts(&mut parts, &())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_header_takes_precedence_over_query() {
        let req = axum::http::Request::builder()
            .uri("/check?access_token=from-query")
            .header(AUTHORIZATION, "Bearer from-header")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract(req).await.as_deref(), Some("from-header"));
    }

    #[tokio::test]
    async fn test_query_fallback() {
        let req = axum::http::Request::builder()
            .uri("/check?access_token=from-query")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract(req).await.as_deref(), Some("from-query"));
    }

    #[tokio::test]
    async fn test_no_token() {
        let req = axum::http::Request::builder()
            .uri("/check")
            .body(Body::empty())
            .unwrap();

        assert!(extract(req).await.0.is_none());
    }

    #[tokio::test]
    async fn test_extension_is_reused() {
        let mut req = axum::http::Request::builder()
            .uri("/check?access_token=ignored")
            .body(Body::empty())
            .unwrap();
        req.extensions_mut()
            .insert(RequestToken(Some("parsed".to_string())));

        assert_eq!(extract(req).await.as_deref(), Some("parsed"));
    }
}
