use crate::{
    EventContext, HandlerOutcome, ReconcileError, Result as ReconcileResult, StoreOperation,
};

use idsync_core::UserIdentityEvent;

use std::future::Future;

use log::{debug, error, info, warn};

/// Run a handler body and turn whatever happens into a terminal outcome.
///
/// The body runs in its own task so a panic is contained. Validation
/// failures log at WARN with the raw payload, store failures at ERROR with
/// the operation and user id. A panic is reported against `operation`.
/// Nothing is re-raised.
pub async fn with_error_boundary<F, Fut>(
    ctx: &EventContext,
    operation: StoreOperation,
    raw_event: &UserIdentityEvent,
    handler: F,
) -> HandlerOutcome
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = ReconcileResult<HandlerOutcome>> + Send + 'static,
{
    let log_prefix = ctx.log_prefix();

    let result = tokio::spawn(async move { handler().await }).await;

    match result {
        Ok(Ok(outcome)) => {
            log_applied(&log_prefix, &outcome);
            outcome
        }
        Ok(Err(ReconcileError::Validation { source })) => {
            warn!(
                "{} Invalid event data: {} payload={}",
                log_prefix,
                source,
                raw_event.to_log_string()
            );
            HandlerOutcome::Skipped {
                reason: source.to_string(),
            }
        }
        Ok(Err(ReconcileError::Store {
            operation: failed,
            user_id,
            source,
            location,
        })) => {
            error!(
                "{} Error syncing user: {} failed for user {}: {} {}",
                log_prefix, failed, user_id, source, location
            );
            HandlerOutcome::Failed {
                operation: failed,
                user_id: Some(user_id),
                message: source.to_string(),
            }
        }
        Err(join_error) => {
            let panic_msg = if join_error.is_panic() {
                match join_error.into_panic().downcast::<String>() {
                    Ok(msg) => *msg,
                    Err(any) => match any.downcast::<&str>() {
                        Ok(msg) => msg.to_string(),
                        Err(_) => "Unknown panic".to_string(),
                    },
                }
            } else {
                "Task cancelled".to_string()
            };

            error!(
                "{} Handler panicked during {}: {}",
                log_prefix, operation, panic_msg
            );

            HandlerOutcome::Failed {
                operation,
                user_id: raw_event.user_id().map(str::to_string),
                message: panic_msg,
            }
        }
    }
}

fn log_applied(log_prefix: &str, outcome: &HandlerOutcome) {
    if let HandlerOutcome::Applied {
        operation,
        user_id,
        matched,
    } = outcome
    {
        if *matched {
            info!("{} Applied {} for user {}", log_prefix, operation, user_id);
        } else {
            debug!(
                "{} {} for user {} matched no record",
                log_prefix, operation, user_id
            );
        }
    }
}
