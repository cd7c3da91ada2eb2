// src/core/error.rs
use std::time::Duration;

/// Ways a `/fetch-leads` round trip can fail. Every variant lands the
/// session in the error state; none is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The backend answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("Request failed: {0}")]
    Transport(String),

    /// The body was not a valid search response
    #[error("Failed to parse search response: {0}")]
    Decode(String),

    /// The configured deadline elapsed before the backend answered
    #[error("No response from backend after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl FetchError {
    /// Message shown in the error view.
    pub fn user_message(&self, backend_url: &str) -> String {
        match self {
            FetchError::Timeout(limit) => format!(
                "The search took longer than {}s. Please make sure the backend server at {} is responding.",
                limit.as_secs(),
                backend_url
            ),
            _ => format!(
                "Unable to fetch results. Please make sure the backend server is running at {}.",
                backend_url
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_names_backend() {
        let message = FetchError::Status(502).user_message("http://localhost:8000");
        assert!(message.contains("http://localhost:8000"));
        assert!(message.starts_with("Unable to fetch results"));
    }

    #[test]
    fn test_timeout_message_mentions_limit() {
        let message = FetchError::Timeout(Duration::from_secs(30)).user_message("http://b");
        assert!(message.contains("30s"));
    }

    #[test]
    fn test_display() {
        assert_eq!(FetchError::Status(500).to_string(), "HTTP error! status: 500");
    }
}
