use reqwest::{Response, StatusCode};

use crate::application::ports::LlmClientError;

pub(super) fn map_send_error(error: reqwest::Error) -> LlmClientError {
    if error.is_timeout() {
        LlmClientError::Timeout
    } else {
        LlmClientError::ApiRequestFailed(error.to_string())
    }
}

/// Turns non-2xx responses into errors, keeping the body for diagnostics.
pub(super) async fn ensure_success(response: Response) -> Result<Response, LlmClientError> {
    if response.status() == StatusCode::TOO_MANY_REQUESTS {
        return Err(LlmClientError::RateLimited);
    }

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(LlmClientError::ApiRequestFailed(format!(
            "HTTP {}: {}",
            status, body
        )));
    }

    Ok(response)
}
