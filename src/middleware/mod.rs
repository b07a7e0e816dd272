//! Router-level middleware. Handlers stay free of transport concerns.
//!
//! `apply` is the single entry point used by `app::build_router`; the order of
//! layers is fixed here so tests and the binary see the same stack.
use axum::Router;

use crate::config::Config;

pub mod cors;
pub mod http;
pub mod security_headers;

// Innermost first: limits, CORS, response headers, then request id/trace.
// Each outer layer also sees responses generated by the inner ones.
pub fn apply(router: Router, config: &Config) -> Router {
    let router = http::apply_limits(router, config);
    let router = cors::apply(router, config);
    let router = security_headers::apply(router);
    http::apply_request_tracing(router)
}
