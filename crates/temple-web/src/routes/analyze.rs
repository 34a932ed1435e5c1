//! Analysis API route handlers.
//!
//! The body is parsed inside the handler so that malformed JSON takes the
//! same 500 path as upstream failures.

use axum::{body::Bytes, extract::State, Json};
use temple_core::analysis::{
    self,
    model::{AnalysisRequest, AnalysisResult, SnakeCaseAnalysisRequest},
};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api - camelCase body.
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, ApiError> {
    let req: AnalysisRequest = serde_json::from_slice(&body)?;
    run(&state, req).await
}

/// POST /api/analyze - snake_case body of the alternate deployment.
pub async fn analyze_snake_case(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalysisResult>, ApiError> {
    let req: SnakeCaseAnalysisRequest = serde_json::from_slice(&body)?;
    run(&state, req.into()).await
}

async fn run(state: &AppState, req: AnalysisRequest) -> Result<Json<AnalysisResult>, ApiError> {
    info!(industry = %req.industry, "Received analysis request");
    let result = analysis::run_analysis(state.client.as_ref(), &req).await?;
    Ok(Json(result))
}
