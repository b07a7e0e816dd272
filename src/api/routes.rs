/*
 * Responsibility
 * - URL structure under /api
 * - Wrong method on a known path → AppError::MethodNotAllowed (405)
 */
use axum::{Router, http::Method, routing::get};

use crate::api::handlers::health::health;
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .method_not_allowed_fallback(method_not_allowed)
}

async fn method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method.as_str())
}
