use crate::ShutdownCoordinator;

use tokio::sync::broadcast;

/// Waits for the coordinator's shutdown signal.
///
/// Subscribing happens at construction, so a guard created before
/// `shutdown()` is called never misses it.
pub struct ShutdownGuard {
    coordinator: ShutdownCoordinator,
    shutdown_rx: broadcast::Receiver<()>,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            coordinator: coordinator.clone(),
            shutdown_rx: coordinator.subscribe(),
        }
    }

    /// Wait for shutdown signal
    pub async fn wait(&mut self) {
        if self.coordinator.is_shutdown() {
            return;
        }
        let _ = self.shutdown_rx.recv().await;
    }

    /// Poll for shutdown signal (non-blocking, consumes signal if present)
    pub fn poll_shutdown(&mut self) -> bool {
        matches!(self.shutdown_rx.try_recv(), Ok(_)) || self.coordinator.is_shutdown()
    }
}
