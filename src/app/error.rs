use thiserror::Error;

use crate::domain::FailureKind;

#[derive(Error, Debug)]
pub enum FanfetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Transport failure from a non-reqwest [`Fetcher`](crate::fetcher::Fetcher) implementation.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client is closed")]
    Closed,
}

impl FanfetchError {
    /// Classify this error for the fetch retry policy.
    pub fn kind(&self) -> FailureKind {
        match self {
            FanfetchError::Status { .. } => FailureKind::HttpStatus,
            FanfetchError::Transport(_) => FailureKind::Transport,
            FanfetchError::Decode(_) => FailureKind::Decode,
            FanfetchError::Http(e) => {
                if e.is_status() {
                    FailureKind::HttpStatus
                } else if e.is_builder() {
                    FailureKind::Unexpected
                } else if e.is_decode() {
                    FailureKind::Decode
                } else {
                    // connect, timeout, request, body and redirect errors
                    FailureKind::Transport
                }
            }
            FanfetchError::InvalidUrl(_)
            | FanfetchError::Io(_)
            | FanfetchError::Config(_)
            | FanfetchError::Closed => FailureKind::Unexpected,
        }
    }
}

impl From<crate::config::ConfigError> for FanfetchError {
    fn from(e: crate::config::ConfigError) -> Self {
        FanfetchError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FanfetchError>;
