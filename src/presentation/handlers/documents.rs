use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, TextExtractor};
use crate::presentation::state::AppState;

use super::errors::{attachment, error_response};

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
pub struct PathParams {
    pub path: String,
}

#[derive(Serialize)]
pub struct DocumentResponse {
    pub path: String,
    pub file_name: String,
    pub directory: String,
}

#[tracing::instrument(skip(state, params), fields(q = %params.q))]
pub async fn search_documents_handler<E, L>(
    State(state): State<AppState<E, L>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse
where
    E: TextExtractor + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let service = &state.report_service;
    let documents = service.find_documents(&params.q).await;

    tracing::info!(matches = documents.len(), "Document search");

    let body: Vec<DocumentResponse> = documents
        .iter()
        .map(|document| {
            let path = service.display_path(document);
            let directory = std::path::Path::new(&path)
                .parent()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            DocumentResponse {
                file_name: document.file_name(),
                directory,
                path,
            }
        })
        .collect();

    (StatusCode::OK, Json(body))
}

#[tracing::instrument(skip(state, params), fields(path = %params.path))]
pub async fn download_document_handler<E, L>(
    State(state): State<AppState<E, L>>,
    Query(params): Query<PathParams>,
) -> impl IntoResponse
where
    E: TextExtractor + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let document = match state.report_service.resolve(&params.path) {
        Ok(document) => document,
        Err(e) => return e.into_response(),
    };

    match tokio::fs::read(document.path()).await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (header::CONTENT_DISPOSITION, attachment(&document.file_name())),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read document");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read document: {}", e),
            )
        }
    }
}
