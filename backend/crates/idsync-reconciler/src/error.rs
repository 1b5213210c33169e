use crate::StoreOperation;

use idsync_core::{CoreError, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a handler body stopped early. Never escapes the error boundary.
#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("Invalid event: {source}")]
    Validation {
        #[from]
        source: CoreError,
    },

    #[error("Store {operation} failed for user {user_id}: {source} {location}")]
    Store {
        operation: StoreOperation,
        user_id: String,
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl ReconcileError {
    #[track_caller]
    pub fn store<S: Into<String>>(
        operation: StoreOperation,
        user_id: S,
        source: StoreError,
    ) -> Self {
        ReconcileError::Store {
            operation,
            user_id: user_id.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
