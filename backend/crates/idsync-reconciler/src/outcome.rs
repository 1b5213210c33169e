use crate::StoreOperation;

use serde::Serialize;

/// Terminal result of one handler invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HandlerOutcome {
    /// The store call succeeded. `matched` is false when an update or delete
    /// found no record, which is not an error.
    Applied {
        operation: StoreOperation,
        user_id: String,
        matched: bool,
    },
    /// The event failed validation; no store call was made.
    Skipped { reason: String },
    /// The store call failed or the handler panicked. The event is dropped.
    Failed {
        operation: StoreOperation,
        user_id: Option<String>,
        message: String,
    },
}

impl HandlerOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Applied { .. } => "applied",
            Self::Skipped { .. } => "skipped",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// One function's run for a dispatched event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRun {
    pub function_id: &'static str,
    pub outcome: HandlerOutcome,
}
