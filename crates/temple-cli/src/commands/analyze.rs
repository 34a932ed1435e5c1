//! One-shot analysis from the terminal.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use temple_core::{
    analysis,
    config::CompletionConfig,
    form::{FormField, FormPhase, FormView},
};

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Business idea
    #[arg(long)]
    pub business_idea: Option<String>,

    /// Industry
    #[arg(long)]
    pub industry: Option<String>,

    /// Target audience
    #[arg(long)]
    pub target_audience: Option<String>,

    /// Key features
    #[arg(long)]
    pub key_features: Option<String>,

    /// Never prompt for missing fields
    #[arg(long)]
    pub no_input: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    fn provided(&self, field: FormField) -> Option<&String> {
        match field {
            FormField::BusinessIdea => self.business_idea.as_ref(),
            FormField::Industry => self.industry.as_ref(),
            FormField::TargetAudience => self.target_audience.as_ref(),
            FormField::KeyFeatures => self.key_features.as_ref(),
        }
    }
}

pub async fn execute(args: AnalyzeArgs, config: CompletionConfig) -> Result<()> {
    let form = collect_form(&args)?;
    let client = config.build_client()?;
    run(form, client.as_ref(), args.json).await
}

/// Fill the form from flags, prompting for anything missing.
fn collect_form(args: &AnalyzeArgs) -> Result<FormView> {
    let mut form = FormView::new();

    for field in FormField::ALL {
        let value = match args.provided(field) {
            Some(value) => value.clone(),
            None if args.no_input => String::new(),
            None => prompt_field(field)?,
        };
        form.set(field, value);
    }

    Ok(form)
}

fn prompt_field(field: FormField) -> Result<String> {
    Input::<String>::new()
        .with_prompt(field.label())
        .validate_with(move |input: &String| -> Result<(), &'static str> {
            if input.trim().is_empty() {
                Err(field.required_message())
            } else {
                Ok(())
            }
        })
        .interact_text()
        .with_context(|| format!("Failed to read {}", field.label()))
}

async fn run(
    mut form: FormView,
    client: &dyn temple_core::CompletionClient,
    json: bool,
) -> Result<()> {
    let Some(request) = form.begin_submit() else {
        for (field, message) in form.errors() {
            eprintln!("{} {}: {}", "✗".red().bold(), field.label().bold(), message);
        }
        anyhow::bail!("Missing required fields");
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(form.submit_label());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = analysis::run_analysis(client, &request).await;
    spinner.finish_and_clear();

    let outcome = outcome.map_err(|e| e.to_string());
    form.finish(outcome);

    match (form.phase(), form.result()) {
        (FormPhase::Success, Some(result)) if json => {
            println!("{}", serde_json::to_string_pretty(result)?);
            Ok(())
        }
        (FormPhase::Success, Some(result)) => {
            output::print_analysis(result);
            Ok(())
        }
        _ => {
            let message = form.error().unwrap_or(analysis::FAILURE_MESSAGE);
            anyhow::bail!("{}: {}", analysis::FAILURE_MESSAGE, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(industry: Option<&str>) -> AnalyzeArgs {
        AnalyzeArgs {
            business_idea: Some("Language exchange app".to_string()),
            industry: industry.map(str::to_string),
            target_audience: Some("Students".to_string()),
            key_features: Some("Video chat".to_string()),
            no_input: true,
            json: false,
        }
    }

    #[test]
    fn test_collect_form_uses_flags() {
        let form = collect_form(&args(Some("Education"))).unwrap();
        assert_eq!(form.values().industry, "Education");
        assert_eq!(form.values().business_idea, "Language exchange app");
    }

    #[test]
    fn test_no_input_leaves_missing_fields_empty() {
        let mut form = collect_form(&args(None)).unwrap();
        assert!(form.begin_submit().is_none());
        assert_eq!(
            form.field_error(FormField::Industry),
            Some("Please specify your industry")
        );
    }

    #[tokio::test]
    async fn test_run_rejects_invalid_form() {
        let form = collect_form(&args(None)).unwrap();
        let client = CompletionConfig::default().build_client().unwrap();
        let err = run(form, client.as_ref(), false).await.unwrap_err();
        assert!(err.to_string().contains("Missing required fields"));
    }

    #[tokio::test]
    async fn test_run_reports_missing_api_key() {
        let form = collect_form(&args(Some("Education"))).unwrap();
        let client = CompletionConfig::default().build_client().unwrap();
        let err = run(form, client.as_ref(), false).await.unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }
}
