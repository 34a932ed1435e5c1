//! Server-rendered form page.
//!
//! `GET /` renders an empty form. `POST /` accepts a urlencoded submission,
//! drives the form state through validation and analysis, and renders the
//! page again with values kept and the outcome shown.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use temple_core::{
    analysis::model::{AnalysisRequest, AnalysisResult},
    form::{FormField, FormView},
};
use tracing::error;

use crate::state::AppState;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    fields: Vec<FieldView<'a>>,
    submit_label: &'static str,
    submit_disabled: bool,
    error: Option<&'a str>,
    result: Option<&'a AnalysisResult>,
}

/// View model for one input.
struct FieldView<'a> {
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    required_message: &'static str,
    multiline: bool,
    value: &'a str,
    error: Option<&'static str>,
}

impl<'a> IndexTemplate<'a> {
    fn from_form(form: &'a FormView) -> Self {
        let fields = FormField::ALL
            .iter()
            .map(|field| FieldView {
                name: field.name(),
                label: field.label(),
                placeholder: field.placeholder(),
                required_message: field.required_message(),
                multiline: field.multiline(),
                value: field.value(form.values()),
                error: form.field_error(*field),
            })
            .collect();

        Self {
            fields,
            submit_label: form.submit_label(),
            submit_disabled: form.submit_disabled(),
            error: form.error(),
            result: form.result(),
        }
    }
}

fn render(form: &FormView) -> Response {
    match IndexTemplate::from_form(form).render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render page");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(format!("Template error: {}", e)),
            )
                .into_response()
        }
    }
}

// ============================================================
// HANDLERS
// ============================================================

/// GET / - Render the empty form.
pub async fn index() -> Response {
    render(&FormView::new())
}

/// POST / - Validate, analyze, and render the outcome.
pub async fn submit(State(state): State<AppState>, Form(values): Form<AnalysisRequest>) -> Response {
    let mut form = FormView::with_values(values);
    form.submit(state.client.as_ref()).await;
    render(&form)
}
