use crate::ShutdownCoordinator;

use idsync_db::UserRepository;
use idsync_reconciler::Reconciler;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub reconciler: Reconciler,
    /// Present when a Prometheus recorder is installed
    pub metrics_handle: Option<PrometheusHandle>,
    pub shutdown: ShutdownCoordinator,
}

impl AppState {
    /// Wire a reconciler backed by the SQLite user repository
    pub fn new(
        pool: SqlitePool,
        metrics_handle: Option<PrometheusHandle>,
        shutdown: ShutdownCoordinator,
    ) -> Self {
        let repository = UserRepository::new(pool.clone());

        Self {
            pool,
            reconciler: Reconciler::new(Arc::new(repository)),
            metrics_handle,
            shutdown,
        }
    }
}
