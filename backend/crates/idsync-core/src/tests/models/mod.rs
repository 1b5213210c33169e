mod user_event_kind;
mod user_identity_event;
mod user_patch;
mod user_record;
