//! Business description form state.
//!
//! Models the form the user fills in: four required fields, per-field
//! validation messages, and the `idle -> submitting -> success | error`
//! lifecycle. Both the server-rendered page and the CLI drive this model.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::analysis::{self, model::AnalysisRequest, model::AnalysisResult};
use crate::completion::CompletionClient;

/// Message shown when a failure carries no text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// One of the four form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    BusinessIdea,
    Industry,
    TargetAudience,
    KeyFeatures,
}

impl FormField {
    /// Fields in display order.
    pub const ALL: [FormField; 4] = [
        FormField::BusinessIdea,
        FormField::Industry,
        FormField::TargetAudience,
        FormField::KeyFeatures,
    ];

    /// Input name, identical to the JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Self::BusinessIdea => "businessIdea",
            Self::Industry => "industry",
            Self::TargetAudience => "targetAudience",
            Self::KeyFeatures => "keyFeatures",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::BusinessIdea => "Business Idea",
            Self::Industry => "Industry",
            Self::TargetAudience => "Target Audience",
            Self::KeyFeatures => "Key Features",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::BusinessIdea => "Describe your business idea...",
            Self::Industry => "e.g., Healthcare, Technology, Education",
            Self::TargetAudience => "e.g., Young professionals, Small business owners",
            Self::KeyFeatures => "List the main features of your product/service...",
        }
    }

    /// Validation message shown when the field is left empty.
    pub fn required_message(self) -> &'static str {
        match self {
            Self::BusinessIdea => "Please describe your business idea",
            Self::Industry => "Please specify your industry",
            Self::TargetAudience => "Please specify your target audience",
            Self::KeyFeatures => "Please list your key features",
        }
    }

    /// Free-text fields render as a textarea.
    pub fn multiline(self) -> bool {
        matches!(self, Self::BusinessIdea | Self::KeyFeatures)
    }

    pub fn value(self, req: &AnalysisRequest) -> &str {
        match self {
            Self::BusinessIdea => &req.business_idea,
            Self::Industry => &req.industry,
            Self::TargetAudience => &req.target_audience,
            Self::KeyFeatures => &req.key_features,
        }
    }

    pub fn value_mut(self, req: &mut AnalysisRequest) -> &mut String {
        match self {
            Self::BusinessIdea => &mut req.business_idea,
            Self::Industry => &mut req.industry,
            Self::TargetAudience => &mut req.target_audience,
            Self::KeyFeatures => &mut req.key_features,
        }
    }
}

/// Validation messages keyed by field.
pub type FieldErrors = BTreeMap<FormField, &'static str>;

/// Check that every field is non-empty after trimming.
pub fn validate(req: &AnalysisRequest) -> Result<(), FieldErrors> {
    let errors: FieldErrors = FormField::ALL
        .iter()
        .filter(|field| field.value(req).trim().is_empty())
        .map(|field| (*field, field.required_message()))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Lifecycle of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Success,
    Error,
}

/// View state of the form: current values, messages, and the latest outcome.
#[derive(Debug, Clone)]
pub struct FormView {
    values: AnalysisRequest,
    errors: FieldErrors,
    phase: FormPhase,
    result: Option<AnalysisResult>,
    error: Option<String>,
}

impl Default for FormView {
    fn default() -> Self {
        Self::new()
    }
}

impl FormView {
    pub fn new() -> Self {
        Self::with_values(AnalysisRequest::default())
    }

    pub fn with_values(values: AnalysisRequest) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
            phase: FormPhase::Idle,
            result: None,
            error: None,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *field.value_mut(&mut self.values) = value.into();
    }

    pub fn values(&self) -> &AnalysisRequest {
        &self.values
    }

    pub fn field_error(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submit_disabled(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submit_disabled() {
            "Analyzing..."
        } else {
            "Analyze Business"
        }
    }

    /// Validate and enter `Submitting`.
    ///
    /// Returns the request to send, unmodified, or `None` when the submission
    /// is blocked (a field is empty or a submission is already in flight).
    /// A blocked submission leaves the previous outcome on screen.
    pub fn begin_submit(&mut self) -> Option<AnalysisRequest> {
        if self.phase == FormPhase::Submitting {
            return None;
        }

        if let Err(errors) = validate(&self.values) {
            debug!(missing = errors.len(), "Form submission blocked by validation");
            self.errors = errors;
            return None;
        }

        self.errors.clear();
        self.error = None;
        self.phase = FormPhase::Submitting;
        Some(self.values.clone())
    }

    /// Record the outcome of the in-flight submission.
    pub fn finish(&mut self, outcome: Result<AnalysisResult, String>) {
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
                self.phase = FormPhase::Success;
            }
            Err(message) => {
                let message = if message.trim().is_empty() {
                    FALLBACK_ERROR_MESSAGE.to_string()
                } else {
                    message
                };
                self.result = None;
                self.error = Some(message);
                self.phase = FormPhase::Error;
            }
        }
    }

    /// Validate, run the analysis, and record its outcome.
    ///
    /// Failures are shown with the generic analysis failure message; the
    /// underlying error is only logged.
    pub async fn submit(&mut self, client: &dyn CompletionClient) -> FormPhase {
        let Some(request) = self.begin_submit() else {
            return self.phase;
        };

        let outcome = analysis::run_analysis(client, &request)
            .await
            .map_err(|e| {
                warn!(kind = e.kind(), error = %e, "Form analysis failed");
                analysis::FAILURE_MESSAGE.to_string()
            });
        self.finish(outcome);
        self.phase
    }
}
