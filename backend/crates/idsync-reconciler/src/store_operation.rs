use idsync_core::UserEventKind;

use serde::Serialize;

/// Store call a handler performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreOperation {
    Create,
    Update,
    Delete,
}

impl StoreOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl From<UserEventKind> for StoreOperation {
    fn from(kind: UserEventKind) -> Self {
        match kind {
            UserEventKind::Created => Self::Create,
            UserEventKind::Updated => Self::Update,
            UserEventKind::Deleted => Self::Delete,
        }
    }
}

impl std::fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
