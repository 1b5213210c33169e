pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod shutdown_coordinator;
pub mod shutdown_guard;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    events::{event_response::EventResponse, events::ingest_event},
    functions::{
        function_dto::FunctionDto, function_list_response::FunctionListResponse,
        functions::list_functions,
    },
    metrics::render_metrics,
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;

pub use crate::routes::build_router;
