//! Graceful shutdown: liveness fails first, then in-flight requests drain.

use std::future::Future;
use std::io;

use actix_web::dev::ServerHandle;
use actix_web::web;
use tracing::{info, warn};

use user_directory::inbound::http::health::HealthState;

/// Resolve on SIGINT, or on SIGTERM where the platform has it.
///
/// # Errors
/// Fails when the signal handlers cannot be installed.
pub async fn shutdown_signal() -> io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result,
            _ = terminate.recv() => Ok(()),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

/// Once `signal` resolves, mark the service unhealthy and stop the server
/// gracefully.
pub fn drain_on<S>(signal: S, handle: ServerHandle, health_state: web::Data<HealthState>)
where
    S: Future<Output = io::Result<()>> + 'static,
{
    actix_web::rt::spawn(async move {
        if let Err(error) = signal.await {
            warn!(%error, "shutdown signal unavailable; stopping without draining");
        }
        info!("shutdown requested; draining connections");
        health_state.mark_unhealthy();
        handle.stop(true).await;
    });
}
