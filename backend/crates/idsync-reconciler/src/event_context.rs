use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use uuid::Uuid;

static EVENT_COUNTER: AtomicU64 = AtomicU64::new(0);

const PREFIX_ID_CHARS: usize = 12;

/// Per-invocation context for correlation and tracing
#[derive(Debug, Clone)]
pub struct EventContext {
    /// Delivery id from the envelope, or a generated one
    pub correlation_id: String,
    /// Sequence number within this process
    pub event_seq: u64,
    pub function_id: &'static str,
    pub started_at: Instant,
}

impl EventContext {
    pub fn new(delivery_id: Option<&str>, function_id: &'static str) -> Self {
        let event_seq = EVENT_COUNTER.fetch_add(1, Ordering::SeqCst);

        let correlation_id = match delivery_id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => format!("evt-{}-{}", event_seq, Uuid::new_v4().as_simple()),
        };

        Self {
            correlation_id,
            event_seq,
            function_id,
            started_at: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    pub fn log_prefix(&self) -> String {
        let short_id: String = self.correlation_id.chars().take(PREFIX_ID_CHARS).collect();
        format!("[evt={} fn={}]", short_id, self.function_id)
    }
}
