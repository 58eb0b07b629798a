//! Error types for mushaf-reader
//!
//! Loader failures end up as a single human-readable message in
//! `ChapterRequestResult::Failed`; `user_message` produces that text.

use thiserror::Error;

/// Main error type for the mushaf-reader crate
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure talking to the Quran API
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Quran API answered with a non-success status
    #[error("API error {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Chapter identifier is not a positive integer
    #[error("Invalid chapter id: {0}")]
    InvalidChapter(String),

    /// Playback device rejected a command
    #[error("Playback device error: {0}")]
    Device(String),

    /// Configuration loading errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors from the shared library
    #[error(transparent)]
    Common(#[from] mushaf_common::Error),
}

impl Error {
    /// Classify a reqwest failure for the given endpoint
    pub fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(endpoint.to_string())
        } else if err.is_decode() {
            Error::Parse(format!("{}: {}", endpoint, err))
        } else if let Some(status) = err.status() {
            Error::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            }
        } else {
            Error::Network(format!("{}: {}", endpoint, err))
        }
    }

    /// Diagnostic shown to the reader when a chapter fails to load
    pub fn user_message(&self) -> String {
        match self {
            Error::Network(_) => {
                "Failed to fetch data from the API. Please check your internet connection and try again."
                    .to_string()
            }
            Error::Timeout(_) => {
                "The request timed out. The Quran API might be slow right now.".to_string()
            }
            Error::Status { endpoint, status } => {
                format!("Failed to fetch data from the API ({} returned {}).", endpoint, status)
            }
            Error::Parse(_) => "Received an unexpected response format from the API.".to_string(),
            Error::InvalidChapter(id) => format!("'{}' is not a valid chapter number.", id),
            other => other.to_string(),
        }
    }
}

/// Convenience Result type using mushaf-reader Error
pub type Result<T> = std::result::Result<T, Error>;
