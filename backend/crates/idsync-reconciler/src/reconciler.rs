use crate::handlers::{handle_user_created, handle_user_deleted, handle_user_updated};
use crate::{
    EventContext, FunctionDefinition, FunctionRun, HandlerOutcome, ReconcilerMetrics,
    SYNC_USER_CREATION, SYNC_USER_DELETION, SYNC_USER_UPDATE, StoreOperation, with_error_boundary,
};

use idsync_core::{EventEnvelope, UserEventKind, UserStore};

use std::sync::Arc;

use log::{debug, info};

/// Entry point for delivered identity events.
///
/// Holds no per-user state: each call is independent and safe to run
/// concurrently or out of order with any other.
#[derive(Clone)]
pub struct Reconciler {
    store: Arc<dyn UserStore>,
    metrics: ReconcilerMetrics,
}

impl Reconciler {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            metrics: ReconcilerMetrics::new(),
        }
    }

    pub async fn on_user_created(&self, envelope: EventEnvelope) -> HandlerOutcome {
        self.run(&SYNC_USER_CREATION, envelope).await
    }

    pub async fn on_user_updated(&self, envelope: EventEnvelope) -> HandlerOutcome {
        self.run(&SYNC_USER_UPDATE, envelope).await
    }

    pub async fn on_user_deleted(&self, envelope: EventEnvelope) -> HandlerOutcome {
        self.run(&SYNC_USER_DELETION, envelope).await
    }

    /// Run every function bound to `envelope.name`. Unknown names run nothing.
    pub async fn dispatch(&self, envelope: EventEnvelope) -> Vec<FunctionRun> {
        let functions = FunctionDefinition::for_event(&envelope.name);

        if functions.is_empty() {
            debug!("No function subscribed to event '{}'", envelope.name);
            self.metrics.event_unrouted();
            return Vec::new();
        }

        let mut runs = Vec::with_capacity(functions.len());
        for function in functions {
            let outcome = self.run(function, envelope.clone()).await;
            runs.push(FunctionRun {
                function_id: function.id,
                outcome,
            });
        }
        runs
    }

    async fn run(
        &self,
        function: &'static FunctionDefinition,
        envelope: EventEnvelope,
    ) -> HandlerOutcome {
        let ctx = EventContext::new(envelope.id.as_deref(), function.id);
        self.metrics.event_received(function.id);

        debug!("{} -> {} ({})", ctx.log_prefix(), function.name, envelope.name);

        let store = Arc::clone(&self.store);
        let event = envelope.data;
        let raw_event = event.clone();
        let operation = StoreOperation::from(function.event);

        let outcome = match function.event {
            UserEventKind::Created => {
                with_error_boundary(&ctx, operation, &raw_event, move || {
                    handle_user_created(store, event)
                })
                .await
            }
            UserEventKind::Updated => {
                with_error_boundary(&ctx, operation, &raw_event, move || {
                    handle_user_updated(store, event)
                })
                .await
            }
            UserEventKind::Deleted => {
                with_error_boundary(&ctx, operation, &raw_event, move || {
                    handle_user_deleted(store, event)
                })
                .await
            }
        };

        self.metrics
            .event_completed(function.id, &outcome, ctx.elapsed());

        info!(
            "{} <- {} {} in {}ms",
            ctx.log_prefix(),
            function.id,
            outcome.label(),
            ctx.elapsed_ms()
        );

        outcome
    }
}
