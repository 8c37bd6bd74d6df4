//! Graceful Shutdown Handler
//!
//! Waits for OS signals and runs the destroy phase.

use super::LifecycleManager;
use std::sync::Arc;
use tokio::signal;

/// Runs OnModuleDestroy hooks once Ctrl+C or SIGTERM arrives
///
/// # Example
///
/// ```rust,ignore
/// use dblink::lifecycle::{LifecycleManager, ShutdownHandler};
/// use std::sync::Arc;
///
/// let lifecycle_manager = Arc::new(LifecycleManager::new());
/// let shutdown_handler = ShutdownHandler::new(Arc::clone(&lifecycle_manager));
///
/// tokio::spawn(async move {
///     shutdown_handler.wait_for_shutdown().await;
///     std::process::exit(0);
/// });
/// ```
pub struct ShutdownHandler {
    lifecycle_manager: Arc<LifecycleManager>,
}

impl ShutdownHandler {
    /// Create a new ShutdownHandler
    pub fn new(lifecycle_manager: Arc<LifecycleManager>) -> Self {
        Self { lifecycle_manager }
    }

    /// Wait for a shutdown signal and perform graceful shutdown
    pub async fn wait_for_shutdown(&self) {
        shutdown_signal().await;
        self.shutdown().await;
    }

    /// Run the destroy phase without waiting for a signal
    pub async fn shutdown(&self) {
        tracing::info!("Starting graceful shutdown...");

        if let Err(e) = self.lifecycle_manager.call_module_destroy().await {
            tracing::error!("Error during module destroy: {}", e);
        }

        tracing::info!("Graceful shutdown complete");
    }
}

/// Create a future that completes when a shutdown signal is received
///
/// If a signal handler cannot be installed, that branch never completes and
/// the failure is logged.
///
/// # Example
///
/// ```rust,ignore
/// use dblink::lifecycle::shutdown_signal;
///
/// tokio::select! {
///     _ = shutdown_signal() => {
///         println!("Shutdown signal received");
///     }
///     _ = server.serve() => {}
/// }
/// ```
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{ClientCall, DatabaseService, MemoryClient};
    use tokio::sync::RwLock;

    #[tokio::test]
    async fn test_shutdown_runs_destroy_hooks() {
        let client = Arc::new(MemoryClient::new());
        let db = Arc::new(RwLock::new(DatabaseService::new(client.clone())));

        let mut manager = LifecycleManager::new();
        manager.register_destroy(db, "DatabaseService");

        ShutdownHandler::new(Arc::new(manager)).shutdown().await;

        assert_eq!(client.calls(), vec![ClientCall::Disconnect]);
    }
}
