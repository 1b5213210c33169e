//! Reconciles identity-provider user lifecycle events into the local store.
//!
//! Every handler ends in a terminal [`HandlerOutcome`]; nothing here returns
//! an error to the caller, so a bad event can never make the delivery
//! platform retry it.

pub mod error;
pub mod event_context;
pub mod function_definition;
pub mod handlers;
pub mod metrics;
pub mod outcome;
pub mod reconciler;
pub mod store_operation;

#[cfg(test)]
mod tests;

pub use error::{ReconcileError, Result};
pub use event_context::EventContext;
pub use function_definition::{
    FUNCTIONS, FunctionDefinition, SYNC_USER_CREATION, SYNC_USER_DELETION, SYNC_USER_UPDATE,
};
pub use handlers::error_boundary::with_error_boundary;
pub use metrics::ReconcilerMetrics;
pub use outcome::{FunctionRun, HandlerOutcome};
pub use reconciler::Reconciler;
pub use store_operation::StoreOperation;
