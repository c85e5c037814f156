use reqwest::StatusCode;
use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Why a single NWS request produced no usable body
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection or I/O failure before a response was read
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("request failed with status: {0}")]
    Status(StatusCode),

    /// The body was not a JSON object
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

/// Failures that abort a tool call instead of producing a message
#[derive(Debug, Error)]
pub enum WeatherError {
    /// An NWS payload was missing a field the forecast chain depends on
    #[error("malformed {what}: {source}")]
    Malformed {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<WeatherError> for McpError {
    fn from(err: WeatherError) -> Self {
        McpError::internal_error(err.to_string(), None)
    }
}
