use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends one text prompt to `model` and returns its text completion.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmClientError>;

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, LlmClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub name: String,
    pub supports_generation: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("request timed out")]
    Timeout,
}
