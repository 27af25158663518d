//! Error types for FEC API operations.

use thiserror::Error;

/// Errors from FEC API operations.
#[derive(Error, Debug)]
pub enum FecError {
    #[error("Rate limited by FEC API (HTTP 429)")]
    RateLimited,
    #[error("Invalid API key (HTTP 403)")]
    InvalidApiKey,
    #[error("Request timed out")]
    Timeout,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
    #[error("Network error")]
    Network(#[from] reqwest::Error),
}

impl FecError {
    /// Whether a retry could plausibly succeed. Timeouts, connection
    /// failures, and 429s are transient; bad keys and malformed requests
    /// are not.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            FecError::Timeout | FecError::Network(_) | FecError::RateLimited
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(FecError::RateLimited.is_transient());
        assert!(FecError::Timeout.is_transient());
        assert!(!FecError::InvalidApiKey.is_transient());
        assert!(!FecError::InvalidRequest("bad".to_string()).is_transient());
        assert!(!FecError::ParseFailed("bad".to_string()).is_transient());
    }
}
