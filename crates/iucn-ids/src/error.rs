//! Error types for identifier resolution

use std::fmt;

#[derive(Debug)]
pub enum IucnError {
    /// Input rejected before any request was made
    InvalidInput(String),
    /// Red List API or transport failure
    RedList(iucn_api::RedListError),
}

impl fmt::Display for IucnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::RedList(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for IucnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(_) => None,
            Self::RedList(e) => Some(e),
        }
    }
}

impl From<iucn_api::RedListError> for IucnError {
    fn from(e: iucn_api::RedListError) -> Self {
        Self::RedList(e)
    }
}

pub type Result<T> = std::result::Result<T, IucnError>;
