use std::path::PathBuf;

use config::{Config, File};
use serde::Deserialize;

use crate::application::services::{DEFAULT_MAX_PROMPT_CHARS, DEFAULT_PROMPT_TEMPLATE};

use super::environment::Environment;

const API_KEY_ENV_FALLBACK: &str = "GOOGLE_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub documents: DocumentSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub session_idle_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentSettings {
    pub root_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Gemini,
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "lmstudio")]
    LmStudio,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    pub primary_model: String,
    pub fallback_model: String,
    pub auto_select_model: bool,
    pub max_prompt_chars: usize,
    pub request_timeout_secs: u64,
    pub min_interval_ms: u64,
    #[serde(default)]
    pub prompt_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    InvalidEnvironment(String),
    #[error("missing API key: set APP_LLM__API_KEY or GOOGLE_API_KEY")]
    MissingApiKey,
    #[error("failed to read prompt file {path}: {source}")]
    PromptFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Settings {
    /// Layers built-in defaults, `config/base`, `config/<environment>` and
    /// `APP_*` environment variables (`__` separates nested keys).
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8501_i64)?
            .set_default("server.session_idle_timeout_secs", 3600_i64)?
            .set_default("documents.root_directory", ".")?
            .set_default("llm.provider", "gemini")?
            .set_default("llm.primary_model", "models/gemini-1.5-flash")?
            .set_default("llm.fallback_model", "models/gemini-1.5-flash-8b")?
            .set_default("llm.auto_select_model", true)?
            .set_default("llm.max_prompt_chars", DEFAULT_MAX_PROMPT_CHARS as i64)?
            .set_default("llm.request_timeout_secs", 120_i64)?
            .set_default("llm.min_interval_ms", 4000_i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(File::with_name("config/base").required(false))
            .add_source(
                File::with_name(&format!("config/{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = config.try_deserialize()?;

        if settings.llm.api_key.is_empty() {
            if let Ok(key) = std::env::var(API_KEY_ENV_FALLBACK) {
                settings.llm.api_key = key;
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    /// A missing credential is fatal for every hosted provider.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.llm.provider != LlmProvider::LmStudio && self.llm.api_key.trim().is_empty() {
            return Err(SettingsError::MissingApiKey);
        }
        Ok(())
    }
}

impl LlmSettings {
    pub fn prompt_template(&self) -> Result<String, SettingsError> {
        match &self.prompt_file {
            Some(path) => {
                std::fs::read_to_string(path).map_err(|source| SettingsError::PromptFile {
                    path: path.display().to_string(),
                    source,
                })
            }
            None => Ok(DEFAULT_PROMPT_TEMPLATE.to_string()),
        }
    }
}
