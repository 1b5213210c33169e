use crate::HandlerOutcome;

use std::time::Duration;

use metrics::{counter, histogram};

/// Metrics collector for reconciler runs
#[derive(Clone)]
pub struct ReconcilerMetrics {
    prefix: &'static str,
}

impl ReconcilerMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "idsync_reconciler",
        }
    }

    pub fn event_received(&self, function_id: &str) {
        counter!(format!("{}.events.received", self.prefix)).increment(1);
        counter!(format!("{}.events.received.{}", self.prefix, function_id)).increment(1);
    }

    /// Record the terminal outcome and how long the run took
    pub fn event_completed(
        &self,
        function_id: &str,
        outcome: &HandlerOutcome,
        elapsed: Duration,
    ) {
        let label = outcome.label();
        counter!(format!("{}.events.{}", self.prefix, label)).increment(1);
        counter!(format!("{}.events.{}.{}", self.prefix, label, function_id)).increment(1);
        histogram!(format!("{}.events.latency_ms", self.prefix))
            .record(elapsed.as_millis() as f64);
    }

    pub fn event_unrouted(&self) {
        counter!(format!("{}.events.unrouted", self.prefix)).increment(1);
    }
}

impl Default for ReconcilerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
