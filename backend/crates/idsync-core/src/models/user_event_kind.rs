use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity lifecycle event types the reconciler subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserEventKind {
    #[serde(rename = "identity.user.created")]
    Created,
    #[serde(rename = "identity.user.updated")]
    Updated,
    #[serde(rename = "identity.user.deleted")]
    Deleted,
}

impl UserEventKind {
    pub const ALL: [UserEventKind; 3] = [Self::Created, Self::Updated, Self::Deleted];

    /// Event-type name as delivered in the envelope
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "identity.user.created",
            Self::Updated => "identity.user.updated",
            Self::Deleted => "identity.user.deleted",
        }
    }
}

impl FromStr for UserEventKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "identity.user.created" => Ok(Self::Created),
            "identity.user.updated" => Ok(Self::Updated),
            "identity.user.deleted" => Ok(Self::Deleted),
            _ => Err(CoreError::UnknownEventType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
