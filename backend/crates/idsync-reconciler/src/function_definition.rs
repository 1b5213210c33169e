//! Declarative bindings between event types and handlers.

use idsync_core::UserEventKind;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunctionDefinition {
    /// Unique, stable handler id
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub event: UserEventKind,
}

pub static SYNC_USER_CREATION: FunctionDefinition = FunctionDefinition {
    id: "sync-user-from-clerk",
    name: "Sync User Creation from Clerk",
    description: "Saves new users from Clerk into the database",
    event: UserEventKind::Created,
};

pub static SYNC_USER_UPDATE: FunctionDefinition = FunctionDefinition {
    id: "update-user-from-clerk",
    name: "Sync User Update from Clerk",
    description: "Updates user info in the database when Clerk updates user",
    event: UserEventKind::Updated,
};

pub static SYNC_USER_DELETION: FunctionDefinition = FunctionDefinition {
    id: "delete-user-from-clerk",
    name: "Sync User Deletion from Clerk",
    description: "Deletes user from database when Clerk deletes user",
    event: UserEventKind::Deleted,
};

pub static FUNCTIONS: [&FunctionDefinition; 3] =
    [&SYNC_USER_CREATION, &SYNC_USER_UPDATE, &SYNC_USER_DELETION];

impl FunctionDefinition {
    pub fn all() -> &'static [&'static FunctionDefinition] {
        &FUNCTIONS
    }

    /// Functions subscribed to an event-type name. Unknown names match nothing.
    pub fn for_event(name: &str) -> Vec<&'static FunctionDefinition> {
        FUNCTIONS
            .iter()
            .copied()
            .filter(|function| function.event.as_str() == name)
            .collect()
    }

    pub fn by_id(id: &str) -> Option<&'static FunctionDefinition> {
        FUNCTIONS.iter().copied().find(|function| function.id == id)
    }
}
