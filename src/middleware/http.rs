//! HTTP-level middleware (cross-cutting concerns).
//!
//! Responsibility:
//! - Request-Id generation + propagation (X-Request-Id)
//! - Access logging / request tracing (TraceLayer)
//! - Body size limit and per-request timeout, both taken from `Config`
//! - Converting layer errors into `AppError` JSON responses

use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use axum::http::header::HeaderName;
use axum::response::{IntoResponse, Response};
use axum::{Router, middleware};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::AppError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Body limit and timeout. Every rejection they produce leaves as an `AppError`.
pub fn apply_limits(router: Router, config: &Config) -> Router {
    let layers = ServiceBuilder::new()
        // Service error must be `Infallible` for Router::layer.
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            handle_layer_error(err)
        }))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(RequestBodyLimitLayer::new(config.request_body_limit_bytes));

    router
        .layer(layers)
        .layer(middleware::map_response(body_limit_as_app_error))
}

/// Request id + access log. Applied outermost so every response is tagged.
pub fn apply_request_tracing(router: Router) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(TraceLayer::new_for_http());

    router.layer(layers)
}

// RequestBodyLimitLayer answers 413 with a plain-text body; nothing else here emits 413.
async fn body_limit_as_app_error(response: Response) -> Response {
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge.into_response()
    } else {
        response
    }
}

fn handle_layer_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::RequestTimeout
    } else {
        tracing::error!(error = %err, "unhandled middleware error");
        AppError::Internal
    }
}
