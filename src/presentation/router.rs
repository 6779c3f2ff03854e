use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::presentation::handlers::{
    clear_report_handler, create_report_handler, download_document_handler,
    download_report_handler, end_session_handler, health_handler, history_handler, photos_handler,
    search_documents_handler,
};
use crate::presentation::state::{AppState, SESSION_ID_HEADER, session_middleware};

pub fn create_router<E, L>(state: AppState<E, L>) -> Router
where
    E: TextExtractor + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([axum::http::HeaderName::from_static(SESSION_ID_HEADER)]);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler::<E, L>))
        .route("/api/v1/documents", get(search_documents_handler::<E, L>))
        .route(
            "/api/v1/documents/download",
            get(download_document_handler::<E, L>),
        )
        .route(
            "/api/v1/reports",
            post(create_report_handler::<E, L>).delete(clear_report_handler::<E, L>),
        )
        .route(
            "/api/v1/reports/download",
            get(download_report_handler::<E, L>),
        )
        .route("/api/v1/photos", get(photos_handler::<E, L>))
        .route("/api/v1/history", get(history_handler::<E, L>))
        .route("/api/v1/session", delete(end_session_handler::<E, L>))
        .layer(middleware::from_fn(session_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
