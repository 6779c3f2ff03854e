mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DocumentSettings, LlmProvider, LlmSettings, LoggingSettings, ServerSettings, Settings,
    SettingsError,
};
