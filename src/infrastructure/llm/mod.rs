mod gemini_client;
mod http_status;
mod llm_client_factory;
mod openai_compatible_client;

pub use gemini_client::{GEMINI_BASE_URL, GeminiClient};
pub use llm_client_factory::{LlmClientFactory, LlmClientFactoryError};
pub use openai_compatible_client::{OPENAI_BASE_URL, OpenAiCompatibleClient};
