//! Prompt templates for the two completion calls.

use super::model::AnalysisRequest;

/// Prompt asking for leading companies in the user's industry.
pub fn competitors_prompt(req: &AnalysisRequest) -> String {
    format!(
        "Find 3 leading companies in {} industry targeting {}",
        req.industry, req.target_audience
    )
}

/// Prompt asking for website design recommendations for the business.
pub fn design_prompt(req: &AnalysisRequest) -> String {
    format!(
        "Based on this business idea: {}, industry: {}, target audience: {}, \
         and key features: {}, provide website design recommendations.",
        req.business_idea, req.industry, req.target_audience, req.key_features
    )
}
