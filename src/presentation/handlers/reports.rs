use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, TextExtractor};
use crate::application::services::ReportOutcome;
use crate::domain::Report;
use crate::presentation::state::{AppState, HistoryEntry, SessionId};

use super::documents::PathParams;
use super::errors::{attachment, error_response};

pub const UNREADABLE_MESSAGE: &str =
    "PDF sem texto selecionável: este documento não pode ser lido automaticamente.";

#[derive(Deserialize)]
pub struct ReportRequest {
    pub path: String,
}

#[derive(Serialize)]
pub struct ReportResponse {
    pub path: String,
    pub file_name: String,
    pub status: &'static str,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_kind: Option<&'static str>,
}

#[tracing::instrument(skip(state, request), fields(path = %request.path))]
pub async fn create_report_handler<E, L>(
    State(state): State<AppState<E, L>>,
    Extension(session_id): Extension<SessionId>,
    Json(request): Json<ReportRequest>,
) -> impl IntoResponse
where
    E: TextExtractor + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let service = &state.report_service;
    let document = match service.resolve(&request.path) {
        Ok(document) => document,
        Err(e) => return e.into_response(),
    };

    let session = state.sessions.session(&session_id);
    let mut session = session.lock().await;

    let (report, cached) = match service.report_for(&document, &mut session.cache).await {
        ReportOutcome::Ready { report, cached } => (report, cached),
        ReportOutcome::Unreadable => {
            tracing::info!("Document has no usable text");
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, UNREADABLE_MESSAGE);
        }
    };

    if !cached && report.is_success() {
        session
            .history
            .push(HistoryEntry::new(&document.file_name(), report.render()));
    }

    let (status, failure_kind) = match (&report, cached) {
        (Report::Failure { kind, .. }, _) => ("failed", Some(kind.as_str())),
        (Report::Success { .. }, true) => ("cached", None),
        (Report::Success { .. }, false) => ("generated", None),
    };

    (
        StatusCode::OK,
        Json(ReportResponse {
            path: service.display_path(&document),
            file_name: document.file_name(),
            status,
            content: report.render(),
            model: report.model().map(String::from),
            failure_kind,
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, params), fields(path = %params.path))]
pub async fn clear_report_handler<E, L>(
    State(state): State<AppState<E, L>>,
    Extension(session_id): Extension<SessionId>,
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

    let removed = match state.sessions.get(&session_id) {
        Some(session) => session.lock().await.cache.clear(document.path()).is_some(),
        None => false,
    };
    tracing::debug!(removed, "Cleared cached report");

    StatusCode::NO_CONTENT.into_response()
}

#[tracing::instrument(skip(state, params), fields(path = %params.path))]
pub async fn download_report_handler<E, L>(
    State(state): State<AppState<E, L>>,
    Extension(session_id): Extension<SessionId>,
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

    let content = match state.sessions.get(&session_id) {
        Some(session) => session
            .lock()
            .await
            .cache
            .get(document.path())
            .map(Report::render),
        None => None,
    };

    match content {
        Some(content) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    attachment(&format!("Resumo_{}.txt", document.stem())),
                ),
            ],
            content,
        )
            .into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("No report generated yet for: {}", params.path),
        ),
    }
}
