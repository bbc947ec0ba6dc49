//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, and the Axum server lifecycle
//! including graceful shutdown.

use crate::application::services::StudentService;
use crate::config::Config;
use crate::infrastructure::database;
use crate::infrastructure::persistence::SqliteStudentRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (file created if missing)
/// - Apply migrations
/// - Axum HTTP server
///
/// On SIGINT/SIGTERM the server stops accepting connections and waits up to
/// `config.shutdown_timeout` seconds for in-flight requests.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = database::connect(
        &config.storage_path,
        config.db_max_connections,
        config.connect_timeout(),
    )
    .await
    .with_context(|| format!("Failed to open database at {}", config.storage_path))?;
    tracing::info!(env = %config.env, "Storage initialized");

    database::migrate(&pool)
        .await
        .context("Failed to migrate")?;

    let repository = Arc::new(SqliteStudentRepository::new(Arc::new(pool.clone())));
    let student_service = Arc::new(StudentService::new(repository));

    let state = AppState::new(student_service, config.env.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = signalled_tx.send(());
        })
        .into_future();

    let grace = config.shutdown_grace();
    let deadline = async move {
        match signalled_rx.await {
            Ok(()) => tokio::time::sleep(grace).await,
            Err(_) => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        result = server => result.context("Server error")?,
        _ = deadline => {
            tracing::warn!("In-flight requests still running after {:?}, forcing shutdown", grace);
        }
    }

    pool.close().await;
    tracing::info!("Server shut down");

    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutting down the server");
}
