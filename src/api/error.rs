use thiserror::Error;

/// Failures surfaced by the format discovery call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("failed to fetch video formats (HTTP {0})")]
    Status(u16),
    /// The response body was not the expected format list.
    #[error("malformed response from backend: {0}")]
    Decode(String),
    /// Builds without the web platform cannot reach the backend.
    #[cfg(not(feature = "web"))]
    #[error("format discovery needs a browser environment")]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_mentions_http_code() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "failed to fetch video formats (HTTP 500)"
        );
    }

    #[test]
    fn test_transport_error_carries_cause() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "request failed: connection refused");
    }
}
