//! Port to the persistent store holding [`UserRecord`]s.

use crate::{StoreResult, UserPatch, UserRecord};

use async_trait::async_trait;

/// Primary-key operations the reconciler needs from a store.
///
/// Implementations must make each call atomic per key; the reconciler holds
/// no locks of its own and may call concurrently for the same id.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new record. A second insert for the same id must fail with
    /// [`crate::StoreError::DuplicateKey`].
    async fn create(&self, record: &UserRecord) -> StoreResult<()>;

    /// Apply a partial update. Returns `false` when no record matched.
    async fn update_by_id(&self, id: &str, patch: &UserPatch) -> StoreResult<bool>;

    /// Remove a record. Returns `false` when no record matched.
    async fn delete_by_id(&self, id: &str) -> StoreResult<bool>;

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<UserRecord>>;
}
