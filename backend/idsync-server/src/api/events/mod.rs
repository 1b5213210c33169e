pub mod event_response;
pub mod events;
