//! Local user record keyed by the identity provider's user id.

use crate::{CoreError, Result as CoreErrorResult, UserIdentityEvent};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Provider user id, immutable once created
    pub id: String,
    pub email: String,
    /// Trimmed "first last", possibly empty but never null
    pub name: String,
    pub image_url: Option<String>,
}

impl UserRecord {
    /// Build the record a creation event should insert.
    ///
    /// Fails when the event has no usable id or no usable first email.
    #[track_caller]
    pub fn from_event(event: &UserIdentityEvent) -> CoreErrorResult<Self> {
        let id = event
            .user_id()
            .ok_or_else(|| CoreError::validation("id", "user id is missing"))?;
        let email = event.primary_email().ok_or_else(|| {
            CoreError::validation("email_addresses", "first email address is missing")
        })?;

        Ok(Self {
            id: id.to_string(),
            email: email.to_string(),
            name: event.display_name(),
            image_url: event.image_url.clone(),
        })
    }
}
