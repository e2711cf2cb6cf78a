use std::time::Duration;

use axum::body::Body;
use axum::error_handling::HandleErrorLayer;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{BoxError, Router};
use http::header::{
    ACCEPT, ACCEPT_ENCODING, AUTHORIZATION, CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE, ORIGIN,
};
use http::{HeaderName, Method, StatusCode};
use tower::timeout::error::Elapsed;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::errors::AppError;
use crate::routes::{health, transactions};
use crate::state::AppState;

pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/txn", transactions::router())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                    timeout_error(err, request_timeout)
                }))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(middleware::from_fn(preflight_no_content))
        .with_state(state)
}

fn timeout_error(err: BoxError, request_timeout: Duration) -> AppError {
    if err.is::<Elapsed>() {
        warn!("Request exceeded {:?} deadline", request_timeout);
        AppError::Timeout(request_timeout)
    } else {
        AppError::Unhandled(err.to_string())
    }
}

// Credentials cannot be combined with a wildcard origin, so any origin is
// allowed by echoing it back.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_headers([
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT_ENCODING,
            HeaderName::from_static("x-csrf-token"),
            AUTHORIZATION,
            ACCEPT,
            ORIGIN,
            CACHE_CONTROL,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_methods([
            Method::POST,
            Method::HEAD,
            Method::PATCH,
            Method::OPTIONS,
            Method::GET,
            Method::PUT,
            Method::DELETE,
        ])
}

/// Every OPTIONS request ends in 204 with an empty body; the CORS headers
/// added further in are kept.
async fn preflight_no_content(req: Request, next: Next) -> Response {
    if req.method() != Method::OPTIONS {
        return next.run(req).await;
    }
    let (mut parts, _) = next.run(req).await.into_parts();
    parts.status = StatusCode::NO_CONTENT;
    parts.headers.remove(CONTENT_LENGTH);
    parts.headers.remove(CONTENT_TYPE);
    Response::from_parts(parts, Body::empty())
}
