/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 *   - build information constants, wall-clock source
 * - Cheap to Clone (Arc / &'static str inside)
 */
use std::sync::Arc;

use crate::services::{Clock, SystemClock};

/// HTTP framework reported by the health endpoint. Tracks the `axum` requirement in Cargo.toml.
pub const FRAMEWORK_VERSION: &str = "axum 0.8";

/// Versions fixed at compile time; identical for every request in a deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub framework_version: &'static str,
    pub runtime_version: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            framework_version: FRAMEWORK_VERSION,
            runtime_version: concat!("rust ", env!("CARGO_PKG_RUST_VERSION")),
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub build: BuildInfo,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            build: BuildInfo::current(),
            clock,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
