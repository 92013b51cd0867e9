//! Graceful shutdown on SIGINT/SIGTERM

/// Resolves when the server should stop accepting connections.
/// In-flight turns are allowed to finish by `axum::serve`.
pub async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
    let mut sigint = signal(SignalKind::interrupt()).expect("Failed to install SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => {
            tracing::info!("Received SIGTERM - shutting down");
        }
        _ = sigint.recv() => {
            tracing::info!("Received SIGINT - shutting down");
        }
    }
}
