#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use lvc_reporter::application::ports::{
    LlmClient, LlmClientError, ModelDescriptor, TextExtractor, TextExtractorError,
};
use lvc_reporter::application::services::{GeneratorConfig, ReportGenerator, ReportService};
use lvc_reporter::domain::DocumentRef;
use lvc_reporter::infrastructure::archive::ZipPhotoBundler;
use lvc_reporter::infrastructure::filesystem::WalkDirLocator;

pub const PRIMARY_MODEL: &str = "models/gemini-primary";
pub const FALLBACK_MODEL: &str = "models/gemini-fallback";

pub const USABLE_TEXT: &str = "Levantamento Visual Continuo TD09: panelas abertas no KM 12, \
     trincas interligadas no KM 13 e bueiros obstruidos no KM 15.";

#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    RateLimited,
    ApiError(String),
    Timeout,
}

impl StubReply {
    pub fn text(text: &str) -> Self {
        Self::Text(text.to_string())
    }

    fn to_result(&self) -> Result<String, LlmClientError> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::RateLimited => Err(LlmClientError::RateLimited),
            Self::ApiError(msg) => Err(LlmClientError::ApiRequestFailed(msg.clone())),
            Self::Timeout => Err(LlmClientError::Timeout),
        }
    }
}

/// Replies per model name and records every (model, prompt) call.
#[derive(Default)]
pub struct StubLlmClient {
    replies: HashMap<String, StubReply>,
    models: Option<Vec<ModelDescriptor>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(mut self, model: &str, reply: StubReply) -> Self {
        self.replies.insert(model.to_string(), reply);
        self
    }

    /// `None` makes `list_models` fail.
    pub fn with_models(mut self, models: &[(&str, bool)]) -> Self {
        self.models = Some(
            models
                .iter()
                .map(|(name, supports_generation)| ModelDescriptor {
                    name: name.to_string(),
                    supports_generation: *supports_generation,
                })
                .collect(),
        );
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called_models(&self) -> Vec<String> {
        self.calls().into_iter().map(|(model, _)| model).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LlmClient for StubLlmClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmClientError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));
        self.replies
            .get(model)
            .map(StubReply::to_result)
            .unwrap_or_else(|| Err(LlmClientError::ApiRequestFailed(format!("unknown model {model}"))))
    }

    async fn list_models(&self) -> Result<Vec<ModelDescriptor>, LlmClientError> {
        self.models
            .clone()
            .ok_or_else(|| LlmClientError::ApiRequestFailed("listing unavailable".to_string()))
    }
}

#[derive(Clone)]
enum ExtractorBehaviour {
    Text(String),
    OpenFails,
    PageFails,
}

/// Returns the same text for every document, or fails, and counts calls.
pub struct StubExtractor {
    behaviour: ExtractorBehaviour,
    calls: AtomicUsize,
}

impl StubExtractor {
    fn with_behaviour(behaviour: ExtractorBehaviour) -> Self {
        Self {
            behaviour,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn returning(text: &str) -> Self {
        Self::with_behaviour(ExtractorBehaviour::Text(text.to_string()))
    }

    pub fn failing() -> Self {
        Self::with_behaviour(ExtractorBehaviour::OpenFails)
    }

    /// Fails partway through, as a PDF with one corrupt page does.
    pub fn failing_mid_document() -> Self {
        Self::with_behaviour(ExtractorBehaviour::PageFails)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl TextExtractor for StubExtractor {
    async fn extract_text(&self, document: &DocumentRef) -> Result<String, TextExtractorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behaviour {
            ExtractorBehaviour::Text(text) => Ok(text.clone()),
            ExtractorBehaviour::OpenFails => {
                Err(TextExtractorError::OpenFailed(document.file_name()))
            }
            ExtractorBehaviour::PageFails => Err(TextExtractorError::ExtractionFailed(
                "page 2: corrupt content stream".to_string(),
            )),
        }
    }
}

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Writes `contents` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn copy_fixture(root: &Path, fixture_name: &str, relative: &str) -> PathBuf {
    let bytes = std::fs::read(fixture(fixture_name)).unwrap();
    write_file(root, relative, &bytes)
}

pub fn succeeding_llm() -> StubLlmClient {
    StubLlmClient::new().with_reply(PRIMARY_MODEL, StubReply::text("RELATÓRIO TÉCNICO TD09"))
}

pub fn generator<L>(llm_client: Arc<L>) -> ReportGenerator<L>
where
    L: LlmClient + ?Sized,
{
    ReportGenerator::new(llm_client, GeneratorConfig::new(PRIMARY_MODEL, FALLBACK_MODEL))
}

pub fn report_service<E, L>(
    root: &Path,
    extractor: Arc<E>,
    llm_client: Arc<L>,
) -> ReportService<E, L>
where
    E: TextExtractor + ?Sized,
    L: LlmClient + ?Sized,
{
    ReportService::new(
        root.to_path_buf(),
        Arc::new(WalkDirLocator::default()),
        extractor,
        generator(llm_client),
        Arc::new(ZipPhotoBundler::new()),
    )
}
