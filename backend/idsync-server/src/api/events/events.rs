//! Event ingest endpoint
//!
//! Handlers never fail, so any well-formed envelope is acknowledged with
//! 200 and the platform does not redeliver it. Only a missing event name
//! or a draining server produce an error status.

use crate::{ApiError, ApiResult, AppState, EventResponse};

use idsync_core::EventEnvelope;

use axum::{Json, extract::State};
use log::debug;

/// POST /api/events
pub async fn ingest_event(
    State(state): State<AppState>,
    Json(envelope): Json<EventEnvelope>,
) -> ApiResult<Json<EventResponse>> {
    if envelope.name.trim().is_empty() {
        return Err(ApiError::validation("Event name is required", Some("name")));
    }

    if state.shutdown.is_shutdown() {
        return Err(ApiError::unavailable("Server is shutting down"));
    }

    debug!(
        "Received event '{}' (id={})",
        envelope.name,
        envelope.id.as_deref().unwrap_or("-")
    );

    let event = envelope.name.clone();
    let runs = state.reconciler.dispatch(envelope).await;

    Ok(Json(EventResponse { event, runs }))
}
