/*
 * Responsibility
 * - Tracing / panic hook setup
 * - Config loading → state → Router assembly (middleware included)
 * - axum::serve() until SIGINT/SIGTERM
 */
use std::{panic, process};

use anyhow::Result;
use axum::{Router, http::Uri};
use tokio::signal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, error::AppError, middleware, state::AppState};

fn init_tracing() {
    // RUST_LOG wins when set, e.g. RUST_LOG=info,requirements_api=debug,tower_http=debug
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(%info, "panic");

        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        env = ?config.app_env,
        addr = %config.addr,
        timeout_secs = config.request_timeout.as_secs(),
        "starting health API"
    );

    let app = build_router(AppState::new(), &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

/// Full application router: `/api` routes, 404 fallback, and every middleware layer.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .nest("/api", api::routes())
        .fallback(not_found)
        .with_state(state);

    middleware::apply(router, config)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received SIGINT, starting graceful shutdown"),
        () = terminate => tracing::info!("received SIGTERM, starting graceful shutdown"),
    }
}
