pub mod error;
pub mod events;
pub mod functions;
pub mod metrics;
