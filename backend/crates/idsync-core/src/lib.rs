pub mod error;
pub mod models;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result, StoreError, StoreResult};
pub use error_location::ErrorLocation;
pub use models::email_address::EmailAddress;
pub use models::event_envelope::EventEnvelope;
pub use models::field_update::FieldUpdate;
pub use models::name::normalize_name;
pub use models::user_event_kind::UserEventKind;
pub use models::user_identity_event::UserIdentityEvent;
pub use models::user_patch::UserPatch;
pub use models::user_record::UserRecord;
pub use store::UserStore;
