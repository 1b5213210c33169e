use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        message: String,
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Unknown event type: {value} {location}")]
    UnknownEventType {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

/// Failures surfaced by a [`crate::UserStore`] implementation.
///
/// A replayed creation surfaces as `DuplicateKey`.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User {id} already exists {location}")]
    DuplicateKey {
        id: String,
        location: ErrorLocation,
    },

    #[error("Store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store operation failed: {message} {location}")]
    Operation {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn duplicate_key<S: Into<String>>(id: S) -> Self {
        StoreError::DuplicateKey {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        StoreError::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn operation<S: Into<String>>(message: S) -> Self {
        StoreError::Operation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type StoreResult<T> = StdResult<T, StoreError>;
