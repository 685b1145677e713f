//! Listener lifecycle.

use crate::{AppState, MirageConfig, create_router};
use mirage_error::{MirageResult, ServerError, ServerErrorKind};
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Serve the gallery on an already-bound listener until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the server loop fails.
pub async fn serve(listener: TcpListener, state: AppState) -> MirageResult<()> {
    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(e.to_string())))?;
    info!(%addr, "Mirage gallery listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Server stopped");
    Ok(())
}

/// Bind the configured address and serve the production state.
///
/// # Errors
///
/// Returns an error if the address cannot be bound, the bucket is not
/// configured, or the server loop fails.
#[instrument(skip_all, fields(bind = %config.server().bind()))]
pub async fn run(config: &MirageConfig) -> MirageResult<()> {
    let state = AppState::from_config(config)?;
    let bind = config.server().bind();
    let listener = TcpListener::bind(bind)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(format!("{}: {}", bind, e))))?;
    serve(listener, state).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
