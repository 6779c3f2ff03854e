use async_trait::async_trait;

use crate::domain::DocumentRef;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Concatenated selectable text of every page, in page order.
    async fn extract_text(&self, document: &DocumentRef) -> Result<String, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("unsupported document type: {0}")]
    UnsupportedDocument(String),
    #[error("failed to open document: {0}")]
    OpenFailed(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
