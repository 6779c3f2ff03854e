use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub document_root_available: bool,
    pub active_sessions: usize,
}

/// Degraded (503) when the document root is no longer a readable directory.
pub async fn health_handler<E, L>(State(state): State<AppState<E, L>>) -> impl IntoResponse
where
    E: TextExtractor + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let root = state.report_service.root_directory().to_path_buf();
    let document_root_available = tokio::fs::metadata(&root)
        .await
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false);

    let (code, status) = if document_root_available {
        (StatusCode::OK, "healthy")
    } else {
        tracing::warn!(root = %root.display(), "Document root unavailable");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            document_root_available,
            active_sessions: state.sessions.len(),
        }),
    )
}
