use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::ReportServiceError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ReportServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ReportServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ReportServiceError::OutsideRoot(_) | ReportServiceError::NotADocument(_) => {
                StatusCode::BAD_REQUEST
            }
        };
        tracing::warn!(error = %self, "Rejected document path");
        error_response(status, self.to_string())
    }
}

/// `Content-Disposition` value; non-ASCII and quote characters become `_`.
pub fn attachment(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}
