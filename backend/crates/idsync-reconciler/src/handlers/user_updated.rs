use crate::{HandlerOutcome, ReconcileError, Result as ReconcileResult, StoreOperation};

use idsync_core::{UserIdentityEvent, UserPatch, UserStore};

use std::sync::Arc;

/// Apply an update event as a partial update.
///
/// An update for an id the store does not hold (including one that arrives
/// before its creation) matches nothing and still counts as applied.
pub async fn handle_user_updated(
    store: Arc<dyn UserStore>,
    event: UserIdentityEvent,
) -> ReconcileResult<HandlerOutcome> {
    let (user_id, patch) = UserPatch::from_event(&event)?;

    let matched = store
        .update_by_id(&user_id, &patch)
        .await
        .map_err(|e| ReconcileError::store(StoreOperation::Update, &user_id, e))?;

    Ok(HandlerOutcome::Applied {
        operation: StoreOperation::Update,
        user_id,
        matched,
    })
}
