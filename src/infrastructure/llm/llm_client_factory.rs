use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::gemini_client::{GEMINI_BASE_URL, GeminiClient};
use super::openai_compatible_client::{OPENAI_BASE_URL, OpenAiCompatibleClient};

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("base_url is required for the LM Studio provider")]
    MissingBaseUrl,
    #[error("client initialization failed: {0}")]
    InitializationFailed(#[from] LlmClientError),
}

pub struct LlmClientFactory;

impl LlmClientFactory {
    pub fn create(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientFactoryError> {
        let timeout = Duration::from_secs(settings.request_timeout_secs);

        match settings.provider {
            LlmProvider::Gemini => {
                let base_url = settings.base_url.as_deref().unwrap_or(GEMINI_BASE_URL);
                tracing::info!(base_url, "Using Gemini LLM client");
                Ok(Arc::new(GeminiClient::new(
                    base_url,
                    &settings.api_key,
                    timeout,
                )?))
            }
            LlmProvider::OpenAi => {
                let base_url = settings.base_url.as_deref().unwrap_or(OPENAI_BASE_URL);
                tracing::info!(base_url, "Using OpenAI LLM client");
                Ok(Arc::new(OpenAiCompatibleClient::new(
                    base_url,
                    &settings.api_key,
                    timeout,
                )?))
            }
            LlmProvider::LmStudio => {
                let base_url = settings
                    .base_url
                    .as_deref()
                    .ok_or(LlmClientFactoryError::MissingBaseUrl)?;
                tracing::info!(base_url, "Using LM Studio LLM client");
                Ok(Arc::new(OpenAiCompatibleClient::new(
                    base_url,
                    &settings.api_key,
                    timeout,
                )?))
            }
        }
    }
}
