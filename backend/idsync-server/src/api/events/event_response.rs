use idsync_reconciler::FunctionRun;

use serde::Serialize;

/// Result of dispatching one delivered event
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub event: String,
    pub runs: Vec<FunctionRun>,
}
