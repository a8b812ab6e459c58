//! HTTP middleware: CORS headers and bearer-token authentication.
//!
//! ```text
//! request ─► TraceLayer ─► cors ─► require_auth ─► handler
//!                            │          │
//!                            │          └─ 401 (no/invalid token), handler skipped
//!                            └─ OPTIONS: 200 empty body, nothing below runs
//! ```

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    AUTHORIZATION,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::auth::{extract_bearer_token, AuthError, AuthenticatedUser, IdentityProvider};
use crate::error::ApiError;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Adds the CORS headers to every response and answers preflight requests.
pub async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        debug!(uri = %request.uri(), "Answering preflight request");
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));

    response
}

/// Rejects requests without a verifiable bearer token.
///
/// On success the caller's [`AuthenticatedUser`] is added to the request
/// extensions.
pub async fn require_auth(
    State(identity): State<Arc<dyn IdentityProvider>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map(|value| extract_bearer_token(value).to_string())
        .map_err(|_| AuthError::InvalidToken("malformed Authorization header".to_string()))?;

    let subject = identity.verify(&token).await?;

    debug!(subject = %subject, "Request authenticated");
    request
        .extensions_mut()
        .insert(AuthenticatedUser { subject });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtIdentityProvider;
    use axum::body::{to_bytes, Body};
    use axum::routing::get;
    use axum::{Extension, Router};
    use chrono::Duration;
    use tower::ServiceExt;

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        user.subject
    }

    fn app(provider: Arc<JwtIdentityProvider>) -> Router {
        let identity: Arc<dyn IdentityProvider> = provider;
        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(axum::middleware::from_fn_with_state(identity, require_auth))
            .layer(axum::middleware::from_fn(cors))
    }

    fn get_whoami(auth: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/whoami");
        if let Some(value) = auth {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let provider = Arc::new(JwtIdentityProvider::new("test-secret"));
        let token = provider.issue("user-001", Duration::hours(1)).unwrap();

        let response = app(provider)
            .oneshot(get_whoami(Some(&format!("Bearer {}", token))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"user-001");
    }

    #[tokio::test]
    async fn test_raw_token_is_accepted() {
        let provider = Arc::new(JwtIdentityProvider::new("test-secret"));
        let token = provider.issue("user-002", Duration::hours(1)).unwrap();

        let response = app(provider).oneshot(get_whoami(Some(&token))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_or_bad_token_is_unauthorized() {
        let provider = Arc::new(JwtIdentityProvider::new("test-secret"));

        let response = app(provider.clone()).oneshot(get_whoami(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );

        let response = app(provider)
            .oneshot(get_whoami(Some("Bearer nope")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_preflight_skips_auth() {
        let provider = Arc::new(JwtIdentityProvider::new("test-secret"));
        let request = axum::http::Request::builder()
            .method(Method::OPTIONS)
            .uri("/whoami")
            .body(Body::empty())
            .unwrap();

        let response = app(provider).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            ALLOW_METHODS
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }
}
