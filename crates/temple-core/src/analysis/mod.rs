//! Business analysis: competitor discovery and design recommendations.

pub mod model;
pub mod prompt;

use tracing::{debug, info, Instrument};

use crate::completion::CompletionClient;
use crate::error::TempleResult;

use model::{AnalysisRequest, AnalysisResult};

/// Message returned to callers for any failed analysis.
pub const FAILURE_MESSAGE: &str = "Failed to analyze business";

/// Run both completion calls for one request.
///
/// The calls are sequential: the design prompt is only sent after the
/// competitor prompt has succeeded, and any failure aborts the whole analysis.
pub async fn run_analysis(
    client: &dyn CompletionClient,
    req: &AnalysisRequest,
) -> TempleResult<AnalysisResult> {
    let analysis_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("analysis", id = %analysis_id, industry = %req.industry);

    analyze(client, req).instrument(span).await
}

async fn analyze(
    client: &dyn CompletionClient,
    req: &AnalysisRequest,
) -> TempleResult<AnalysisResult> {
    debug!("Requesting competitors");
    let competitors = client.complete(&prompt::competitors_prompt(req)).await?;

    debug!("Requesting design recommendations");
    let design = client.complete(&prompt::design_prompt(req)).await?;

    info!(
        competitors_len = competitors.len(),
        design_len = design.len(),
        "Analysis complete"
    );
    Ok(AnalysisResult { competitors, design })
}
