use crate::{CoreError, FieldUpdate, Result as CoreErrorResult, UserIdentityEvent};

use serde::Serialize;

/// Sparse set of columns to apply to an existing [`crate::UserRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    pub email: FieldUpdate<String>,
    pub name: FieldUpdate<String>,
    pub image_url: FieldUpdate<Option<String>>,
}

impl UserPatch {
    /// Build the target id and patch an update event should apply.
    ///
    /// `email` is only set when the provider sent a usable first address.
    /// `name` and `image_url` are always set, so an event without name
    /// fragments resets the name to `""` and one without an image writes NULL.
    #[track_caller]
    pub fn from_event(event: &UserIdentityEvent) -> CoreErrorResult<(String, Self)> {
        let id = event
            .user_id()
            .ok_or_else(|| CoreError::validation("id", "user id is missing"))?;

        let patch = Self {
            email: FieldUpdate::from_option(event.primary_email().map(str::to_string)),
            name: FieldUpdate::Set(event.display_name()),
            image_url: FieldUpdate::Set(event.image_url.clone()),
        };

        Ok((id.to_string(), patch))
    }

    pub fn is_empty(&self) -> bool {
        !self.email.is_set() && !self.name.is_set() && !self.image_url.is_set()
    }
}
