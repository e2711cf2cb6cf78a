use std::future::{Future, IntoFuture};
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::services::TransactionService;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("in-flight requests still running after {0:?}")]
    GraceExceeded(Duration),
}

/// Serves `app` until `shutdown` resolves, then stops accepting connections
/// and gives in-flight requests `grace` to finish before closing storage.
///
/// Storage is left open when the grace period runs out; the caller is
/// expected to exit.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    service: TransactionService,
    grace: Duration,
    shutdown: F,
) -> Result<(), ServeError>
where
    F: Future<Output = ()>,
{
    let (stop_tx, mut stop_rx) = watch::channel(());
    let mut server = tokio::spawn(
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.changed().await;
            })
            .into_future(),
    );

    tokio::select! {
        joined = &mut server => {
            service.shutdown().await;
            joined??;
            return Ok(());
        }
        _ = shutdown => {}
    }

    info!("Shutting down, waiting up to {:?} for in-flight requests", grace);
    let _ = stop_tx.send(());

    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => {
            service.shutdown().await;
            joined??;
            info!("Server exiting");
            Ok(())
        }
        Err(_) => {
            warn!("In-flight requests still running after {:?}", grace);
            server.abort();
            Err(ServeError::GraceExceeded(grace))
        }
    }
}
