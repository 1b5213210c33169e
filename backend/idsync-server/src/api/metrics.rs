use crate::{ApiError, ApiResult, AppState};

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// GET /metrics
///
/// Prometheus text exposition of the installed recorder
pub async fn render_metrics(State(state): State<AppState>) -> ApiResult<Response> {
    let handle = state
        .metrics_handle
        .as_ref()
        .ok_or_else(|| ApiError::not_found("Metrics recorder not installed"))?;

    Ok(([(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)], handle.render()).into_response())
}
