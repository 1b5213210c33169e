use crate::{HandlerOutcome, ReconcileError, Result as ReconcileResult, StoreOperation};

use idsync_core::{CoreError, UserIdentityEvent, UserStore};

use std::sync::Arc;

/// Remove the user named by a deletion event. Deleting an absent user is a no-op.
pub async fn handle_user_deleted(
    store: Arc<dyn UserStore>,
    event: UserIdentityEvent,
) -> ReconcileResult<HandlerOutcome> {
    let user_id = event
        .user_id()
        .ok_or_else(|| CoreError::validation("id", "user id is missing"))?
        .to_string();

    let matched = store
        .delete_by_id(&user_id)
        .await
        .map_err(|e| ReconcileError::store(StoreOperation::Delete, &user_id, e))?;

    Ok(HandlerOutcome::Applied {
        operation: StoreOperation::Delete,
        user_id,
        matched,
    })
}
