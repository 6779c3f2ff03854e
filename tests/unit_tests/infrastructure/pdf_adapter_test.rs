use lvc_reporter::application::ports::{TextExtractor, TextExtractorError};
use lvc_reporter::domain::{DocumentRef, ExtractedText};
use lvc_reporter::infrastructure::text_processing::{PdfAdapter, join_pages};

use crate::helpers::{fixture, write_file};

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_pages_appear_in_document_order() {
    let adapter = PdfAdapter::new();
    let document = DocumentRef::new(fixture("three_pages.pdf"));

    let text = adapter.extract_text(&document).await.unwrap();

    let first = text.find("PAGE-ONE-MARKER").unwrap();
    let third = text.find("PAGE-THREE-MARKER").unwrap();
    assert!(first < third);
    assert!(ExtractedText::new(text).is_usable());
}

#[tokio::test]
async fn given_image_only_pdf_when_extracting_then_text_is_not_usable() {
    let adapter = PdfAdapter::new();
    let document = DocumentRef::new(fixture("image_only.pdf"));

    let text = adapter.extract_text(&document).await.unwrap_or_default();

    assert!(!ExtractedText::new(text).is_usable());
}

#[tokio::test]
async fn given_corrupt_file_when_extracting_then_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "corrupt.pdf", b"not a pdf at all");
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(&DocumentRef::new(path)).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn given_missing_file_when_extracting_then_returns_open_failed() {
    let dir = tempfile::tempdir().unwrap();
    let adapter = PdfAdapter::new();

    let result = adapter
        .extract_text(&DocumentRef::new(dir.path().join("missing.pdf")))
        .await;

    assert!(matches!(result, Err(TextExtractorError::OpenFailed(_))));
}

#[tokio::test]
async fn given_non_pdf_document_when_extracting_then_returns_unsupported() {
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(&DocumentRef::new("/data/photo.jpg")).await;

    assert!(matches!(result, Err(TextExtractorError::UnsupportedDocument(_))));
}

#[test]
fn given_pages_with_blank_entries_when_joining_then_blank_pages_contribute_nothing() {
    let pages = ["first page", "", "  \n", "third page"].map(Ok::<_, String>);

    let text = join_pages(pages).unwrap();

    assert_eq!(text, "first page\nthird page\n");
}

#[test]
fn given_no_pages_when_joining_then_returns_empty_string() {
    assert_eq!(join_pages(Vec::<Result<String, String>>::new()).unwrap(), "");
}

#[test]
fn given_one_failed_page_when_joining_then_whole_document_fails_without_partial_text() {
    let pages = vec![
        Ok("PAGE-ONE-MARKER ".repeat(10)),
        Err("corrupt content stream".to_string()),
        Ok("PAGE-THREE-MARKER ".repeat(10)),
    ];

    let result = join_pages(pages);

    match result {
        Err(TextExtractorError::ExtractionFailed(msg)) => {
            assert!(msg.contains("page 2"));
            assert!(msg.contains("corrupt content stream"));
        }
        other => panic!("expected extraction failure, got {other:?}"),
    }
}
