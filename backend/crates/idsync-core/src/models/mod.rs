pub mod email_address;
pub mod event_envelope;
pub mod field_update;
pub mod name;
pub mod user_event_kind;
pub mod user_identity_event;
pub mod user_patch;
pub mod user_record;
