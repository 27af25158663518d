//! Error types for the library layer.

use std::fmt;

use scorecard_fec::FecError;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation failures.
#[derive(Debug)]
pub enum ScorecardError {
    /// An error from the underlying FEC API client.
    Api(FecError),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for ScorecardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ScorecardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FecError> for ScorecardError {
    fn from(e: FecError) -> Self {
        Self::Api(e)
    }
}
