use crate::{HandlerOutcome, ReconcileError, Result as ReconcileResult, StoreOperation};

use idsync_core::{UserIdentityEvent, UserRecord, UserStore};

use std::sync::Arc;

/// Insert the user described by a creation event.
///
/// A replayed creation fails with a duplicate key in the store and ends as
/// `Failed` at the boundary; the stored record is left as it was.
pub async fn handle_user_created(
    store: Arc<dyn UserStore>,
    event: UserIdentityEvent,
) -> ReconcileResult<HandlerOutcome> {
    let record = UserRecord::from_event(&event)?;

    store
        .create(&record)
        .await
        .map_err(|e| ReconcileError::store(StoreOperation::Create, &record.id, e))?;

    Ok(HandlerOutcome::Applied {
        operation: StoreOperation::Create,
        user_id: record.id,
        matched: true,
    })
}
