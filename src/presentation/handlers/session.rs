use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Serialize;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::presentation::state::{AppState, SessionId};

#[derive(Serialize)]
pub struct HistoryItem {
    pub generated_at: String,
    pub label: String,
    pub content: String,
}

/// Most recent first. An unknown session has an empty history.
pub async fn history_handler<E, L>(
    State(state): State<AppState<E, L>>,
    Extension(session_id): Extension<SessionId>,
) -> impl IntoResponse
where
    E: TextExtractor + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let items: Vec<HistoryItem> = match state.sessions.get(&session_id) {
        Some(session) => session
            .lock()
            .await
            .history
            .iter()
            .rev()
            .map(|entry| HistoryItem {
                generated_at: entry.generated_at.clone(),
                label: entry.label.clone(),
                content: entry.content.clone(),
            })
            .collect(),
        None => Vec::new(),
    };

    (StatusCode::OK, Json(items))
}

pub async fn end_session_handler<E, L>(
    State(state): State<AppState<E, L>>,
    Extension(session_id): Extension<SessionId>,
) -> impl IntoResponse
where
    E: TextExtractor + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let existed = state.sessions.end(&session_id);
    tracing::info!(session_id = %session_id, existed, "Session ended");
    StatusCode::NO_CONTENT
}
