use crate::UserIdentityEvent;
use crate::models::user_identity_event::null_as_default;

use serde::{Deserialize, Serialize};

/// Delivered message wrapping an event-type name and its payload.
///
/// Handlers only read `data`. `name` drives dispatch, `id` becomes the
/// correlation id in log lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: UserIdentityEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Producer timestamp in milliseconds since the epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
}

impl EventEnvelope {
    pub fn new<S: Into<String>>(name: S, data: UserIdentityEvent) -> Self {
        Self {
            name: name.into(),
            data,
            id: None,
            ts: None,
        }
    }

    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = Some(id.into());
        self
    }
}
