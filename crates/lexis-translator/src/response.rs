use reqwest::{Response, StatusCode};

use crate::TranslateError;

/// Provider-independent meaning of an HTTP status, `None` for success
pub(crate) fn status_error(status: StatusCode) -> Option<TranslateError> {
    match status {
        s if s.is_success() => None,
        StatusCode::TOO_MANY_REQUESTS => Some(TranslateError::RateLimitExceeded),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Some(TranslateError::AuthenticationError)
        }
        s => Some(TranslateError::ApiError(format!("HTTP {}", s))),
    }
}

/// Check the status, then decode the body as JSON
pub(crate) async fn read_json(response: Response) -> Result<serde_json::Value, TranslateError> {
    if let Some(err) = status_error(response.status()) {
        tracing::debug!("Provider answered {}", response.status());
        return Err(err);
    }

    response
        .json()
        .await
        .map_err(|e| TranslateError::ApiError(format!("Failed to parse response: {}", e)))
}
