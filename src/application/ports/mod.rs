mod document_locator;
mod llm_client;
mod photo_bundler;
mod text_extractor;

pub use document_locator::{DocumentLocator, LocatorError};
pub use llm_client::{LlmClient, LlmClientError, ModelDescriptor};
pub use photo_bundler::{BundleError, PhotoBundler};
pub use text_extractor::{TextExtractor, TextExtractorError};
