use crate::{FunctionDto, FunctionListResponse};

use idsync_reconciler::FunctionDefinition;

use axum::Json;

/// GET /api/functions
///
/// List the registered event handlers
pub async fn list_functions() -> Json<FunctionListResponse> {
    Json(FunctionListResponse {
        functions: FunctionDefinition::all()
            .iter()
            .map(|function| FunctionDto::from(*function))
            .collect(),
    })
}
