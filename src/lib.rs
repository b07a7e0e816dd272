//! `GET /api/health` liveness service.
//!
//! The binary in `main.rs` only starts the runtime; everything else lives here so
//! integration tests can drive the same router.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
