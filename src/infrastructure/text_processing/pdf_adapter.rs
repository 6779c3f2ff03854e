use std::fmt;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::DocumentRef;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads the selectable text layer of a PDF. No OCR: scanned pages yield nothing.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_document(path: &Path) -> Result<(usize, String), TextExtractorError> {
        let doc = PdfDocument::open(path)
            .map_err(|e| TextExtractorError::OpenFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let text = join_pages((0..page_count).map(|page_index| doc.extract_text(page_index)))?;

        Ok((page_count, text))
    }
}

/// Each page with text contributes its text plus a line break; empty pages
/// contribute nothing. A single failed page fails the whole document.
pub fn join_pages<I, S, E>(pages: I) -> Result<String, TextExtractorError>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: AsRef<str>,
    E: fmt::Display,
{
    let mut text = String::new();
    for (page_index, page) in pages.into_iter().enumerate() {
        let page = page.map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("page {}: {e}", page_index + 1))
        })?;
        let page = page.as_ref();
        if page.trim().is_empty() {
            continue;
        }
        text.push_str(page);
        text.push('\n');
    }
    Ok(text)
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self), fields(path = %document))]
    async fn extract_text(&self, document: &DocumentRef) -> Result<String, TextExtractorError> {
        if !document.has_extension("pdf") {
            return Err(TextExtractorError::UnsupportedDocument(document.file_name()));
        }

        let path = document.path().to_path_buf();

        let (page_count, text) = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_document(&path)),
        )
        .await
        .map_err(|_| TextExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count, chars = text.chars().count(), "PDF text extraction complete");

        Ok(text)
    }
}
