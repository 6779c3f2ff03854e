use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{FailureKind, Report};

use super::call_spacing::CallSpacing;
use super::report_prompt::{DEFAULT_MAX_PROMPT_CHARS, DEFAULT_PROMPT_TEMPLATE, build_prompt};

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub primary_model: String,
    pub fallback_model: String,
    pub prompt_template: String,
    pub max_prompt_chars: usize,
    pub min_interval: Duration,
}

impl GeneratorConfig {
    pub fn new(primary_model: impl Into<String>, fallback_model: impl Into<String>) -> Self {
        Self {
            primary_model: primary_model.into(),
            fallback_model: fallback_model.into(),
            prompt_template: DEFAULT_PROMPT_TEMPLATE.to_string(),
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
            min_interval: Duration::ZERO,
        }
    }
}

/// Turns extracted text into a [`Report`]: one attempt on the primary model,
/// then exactly one on the fallback model. Never returns an error; a double
/// failure comes back as [`Report::Failure`].
pub struct ReportGenerator<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
    config: GeneratorConfig,
    spacing: CallSpacing,
}

impl<L> ReportGenerator<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>, config: GeneratorConfig) -> Self {
        let spacing = CallSpacing::new(config.min_interval);
        Self {
            llm_client,
            config,
            spacing,
        }
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn generate(&self, text: &str) -> Report {
        let prompt = build_prompt(
            &self.config.prompt_template,
            text,
            self.config.max_prompt_chars,
        );

        let primary = &self.config.primary_model;
        let primary_error = match self.attempt(primary, &prompt).await {
            Ok(text) => return success(text, primary),
            Err(e) => e,
        };

        let fallback = &self.config.fallback_model;
        tracing::warn!(
            model = %primary,
            fallback = %fallback,
            error = %primary_error,
            "Primary model failed, trying fallback"
        );

        match self.attempt(fallback, &prompt).await {
            Ok(text) => success(text, fallback),
            Err(fallback_error) => {
                tracing::error!(
                    model = %fallback,
                    error = %fallback_error,
                    "Fallback model failed"
                );
                Report::Failure {
                    kind: failure_kind(&fallback_error),
                    detail: format!(
                        "{primary}: {primary_error}; {fallback}: {fallback_error}"
                    ),
                }
            }
        }
    }

    async fn attempt(&self, model: &str, prompt: &str) -> Result<String, LlmClientError> {
        self.spacing.wait_turn().await;
        self.llm_client.generate(model, prompt).await
    }
}

fn success(text: String, model: &str) -> Report {
    tracing::info!(model, chars = text.chars().count(), "Report generated");
    Report::Success {
        text,
        model: model.to_string(),
    }
}

fn failure_kind(error: &LlmClientError) -> FailureKind {
    match error {
        LlmClientError::ApiRequestFailed(_) => FailureKind::Api,
        LlmClientError::RateLimited => FailureKind::RateLimited,
        LlmClientError::InvalidResponse(_) => FailureKind::InvalidResponse,
        LlmClientError::Timeout => FailureKind::Timeout,
    }
}
