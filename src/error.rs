//! Error types for the reporting tool.

use thiserror::Error;

/// Main error type for all reporting operations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// HTTP request failed at the transport level.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The remote API answered with a non-success status code.
    #[error("HTTP status {status} from {url}")]
    HttpStatus {
        /// Status code of the response.
        status: reqwest::StatusCode,
        /// URL that was requested.
        url: String,
    },

    /// A response carried no usable payload (e.g. an empty campaign list).
    #[error("No data from API: {0}")]
    NoDataApi(String),

    /// Writing a report line failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic API client error with message.
    #[error("API error: {0}")]
    ApiError(String),
}

/// Result type alias for reporting operations.
pub type Result<T> = std::result::Result<T, ReportError>;
