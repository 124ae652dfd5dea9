//! Process lifecycle: tracing setup, listener, graceful shutdown.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::Notify;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::adapters::http::{app_router, DeveloperAppState};
use crate::adapters::mongo::ConnectError;
use crate::config::{ConfigError, ServerConfig, ValidationError};
use crate::ports::ProfileStore;

/// Startup-fatal and serve-loop errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid server address: {0}")]
    Address(#[from] ValidationError),

    #[error("database connection failed: {0}")]
    Connect(#[from] ConnectError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter. Production emits JSON lines,
/// everything else the compact human format.
pub fn init_tracing(config: &ServerConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let (json, compact) = if config.is_production() {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_level(true)
                    .with_target(false),
            ),
        )
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json)
        .with(compact)
        .init();
}

/// Bind the configured address and serve until SIGINT or SIGTERM.
pub async fn run(config: &ServerConfig, store: Arc<dyn ProfileStore>) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    serve(listener, store, shutdown_signal(), config.shutdown_grace()).await
}

/// Serve on an already bound listener until `signal` resolves.
///
/// After the signal, in-flight requests get `grace` to finish; whatever is
/// still running afterwards is abandoned and the store is closed without
/// waiting for it. The store is closed on every exit path.
pub async fn serve<F>(
    listener: TcpListener,
    store: Arc<dyn ProfileStore>,
    signal: F,
    grace: Duration,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send,
{
    let app = app_router(DeveloperAppState::new(Arc::clone(&store)));

    let stop = Arc::new(Notify::new());
    let stopped = Arc::clone(&stop);
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { stopped.notified().await })
            .await
    });

    let (outcome, drained) = tokio::select! {
        joined = &mut server => {
            error!("HTTP server stopped without a shutdown signal");
            (flatten(joined), true)
        }
        _ = signal => {
            info!(grace_secs = grace.as_secs(), "shutdown signal received, draining requests");
            stop.notify_one();
            match tokio::time::timeout(grace, &mut server).await {
                Ok(joined) => {
                    info!("in-flight requests drained");
                    (flatten(joined), true)
                }
                Err(_) => {
                    warn!("grace period elapsed, abandoning remaining requests");
                    server.abort();
                    (Ok(()), false)
                }
            }
        }
    };

    // Connection tasks survive `abort` and may still hold store resources.
    if drained {
        store.close().await;
    } else {
        store.close_now().await;
    }
    info!("server has shut down");
    outcome
}

fn flatten(
    joined: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<(), ServerError> {
    joined??;
    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
