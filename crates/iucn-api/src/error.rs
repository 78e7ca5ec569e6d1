//! Error types for the Red List API client

use std::fmt;

/// Errors that can occur when interacting with the Red List API
#[derive(Debug)]
pub enum RedListError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Failed to parse JSON response
    Json(serde_json::Error),
    /// No API token was configured
    MissingKey,
    /// The API answered with an error status or message
    Api(String),
}

impl fmt::Display for RedListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Red List HTTP error: {}", e),
            Self::Json(e) => write!(f, "Red List JSON parse error: {}", e),
            Self::MissingKey => write!(f, "Red List API key is not set (IUCN_REDLIST_KEY)"),
            Self::Api(msg) => write!(f, "Red List API error: {}", msg),
        }
    }
}

impl std::error::Error for RedListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::MissingKey | Self::Api(_) => None,
        }
    }
}

impl From<reqwest::Error> for RedListError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for RedListError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for Red List API operations
pub type Result<T> = std::result::Result<T, RedListError>;
