use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{
    BundleError, DocumentLocator, LlmClient, PhotoBundler, TextExtractor,
};
use crate::domain::{DocumentRef, ExtractedText, PhotoArchive, Report, has_extension};

use super::report_cache::ReportCache;
use super::report_generator::ReportGenerator;

/// Search, extraction, cached generation and photo bundling for the
/// documents under one root directory.
pub struct ReportService<E, L>
where
    E: TextExtractor + ?Sized,
    L: LlmClient + ?Sized,
{
    root_directory: PathBuf,
    locator: Arc<dyn DocumentLocator>,
    extractor: Arc<E>,
    generator: ReportGenerator<L>,
    bundler: Arc<dyn PhotoBundler>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Ready { report: Report, cached: bool },
    /// No usable text layer; the generator was not called.
    Unreadable,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("path is outside the document root: {0}")]
    OutsideRoot(String),
    #[error("not a PDF document: {0}")]
    NotADocument(String),
}

impl<E, L> ReportService<E, L>
where
    E: TextExtractor + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(
        root_directory: PathBuf,
        locator: Arc<dyn DocumentLocator>,
        extractor: Arc<E>,
        generator: ReportGenerator<L>,
        bundler: Arc<dyn PhotoBundler>,
    ) -> Self {
        let root_directory = root_directory.canonicalize().unwrap_or(root_directory);
        Self {
            root_directory,
            locator,
            extractor,
            generator,
            bundler,
        }
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// Never fails: an unreadable root yields no documents.
    pub async fn find_documents(&self, search_term: &str) -> Vec<DocumentRef> {
        let locator = Arc::clone(&self.locator);
        let root = self.root_directory.clone();
        let term = search_term.to_string();

        let result =
            tokio::task::spawn_blocking(move || locator.find_documents(&term, &root)).await;

        match result {
            Ok(Ok(documents)) => documents,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Document search failed");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(error = %e, "Document search task failed");
                Vec::new()
            }
        }
    }

    /// Maps a client-supplied path (absolute or root-relative) onto a PDF
    /// inside the root directory.
    pub fn resolve(&self, raw_path: &str) -> Result<DocumentRef, ReportServiceError> {
        let candidate = Path::new(raw_path);
        let joined = if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.root_directory.join(candidate)
        };

        let canonical = joined
            .canonicalize()
            .map_err(|_| ReportServiceError::NotFound(raw_path.to_string()))?;
        if !canonical.starts_with(&self.root_directory) {
            return Err(ReportServiceError::OutsideRoot(raw_path.to_string()));
        }

        if !canonical.is_file() || !has_extension(&canonical, "pdf") {
            return Err(ReportServiceError::NotADocument(raw_path.to_string()));
        }

        Ok(DocumentRef::new(canonical))
    }

    /// Path shown to clients: relative to the root when possible.
    pub fn display_path(&self, document: &DocumentRef) -> String {
        let path = document.path();
        path.strip_prefix(&self.root_directory)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Extraction errors are logged and reported as `None`.
    pub async fn extract(&self, document: &DocumentRef) -> Option<ExtractedText> {
        match self.extractor.extract_text(document).await {
            Ok(text) => Some(ExtractedText::new(text)),
            Err(e) => {
                tracing::warn!(path = %document, error = %e, "Text extraction failed");
                None
            }
        }
    }

    #[tracing::instrument(skip(self, cache), fields(path = %document))]
    pub async fn report_for(
        &self,
        document: &DocumentRef,
        cache: &mut ReportCache,
    ) -> ReportOutcome {
        if let Some(report) = cache.get(document.path()) {
            tracing::debug!("Report cache hit");
            return ReportOutcome::Ready {
                report: report.clone(),
                cached: true,
            };
        }

        let text = match self.extract(document).await {
            Some(text) if text.is_usable() => text,
            Some(text) => {
                tracing::info!(chars = text.char_count(), "Extracted text below usability threshold");
                return ReportOutcome::Unreadable;
            }
            None => return ReportOutcome::Unreadable,
        };

        let report = self.generator.generate(text.as_str()).await;

        if report.is_success() {
            cache.put(document.path(), report.clone());
        }

        ReportOutcome::Ready {
            report,
            cached: false,
        }
    }

    /// `Ok(None)` when the document's directory holds no photos.
    pub async fn bundle_photos(
        &self,
        document: &DocumentRef,
    ) -> Result<Option<PhotoArchive>, BundleError> {
        let bundler = Arc::clone(&self.bundler);
        let directory = document.directory().to_path_buf();

        tokio::task::spawn_blocking(move || bundler.bundle_photos(&directory))
            .await
            .map_err(|e| BundleError::Archive(format!("task join error: {e}")))?
    }
}
