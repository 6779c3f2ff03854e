use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::presentation::state::AppState;

use super::documents::PathParams;
use super::errors::{attachment, error_response};

/// 200 with a zip, 204 when the folder holds no photos, 500 when bundling fails.
#[tracing::instrument(skip(state, params), fields(path = %params.path))]
pub async fn photos_handler<E, L>(
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

    match state.report_service.bundle_photos(&document).await {
        Ok(Some(archive)) => {
            let context = document
                .directory()
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| document.stem());
            tracing::info!(entries = archive.entry_count(), "Serving photo archive");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/zip".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        attachment(&format!("Fotos_{context}.zip")),
                    ),
                ],
                archive.bytes,
            )
                .into_response()
        }
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Photo bundling failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to bundle photos: {}", e),
            )
        }
    }
}
