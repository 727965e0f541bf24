use thiserror::Error;

/// The response body was not a current-weather document we understand.
///
/// Covers empty or truncated input, invalid JSON, and missing or mistyped
/// fields alike.
#[derive(Debug, Error)]
#[error("Failed to parse OpenWeather current JSON")]
pub struct ParseError(#[from] serde_json::Error);

/// Errors returned by [`crate::Client`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to send request to OpenWeather")]
    Request(#[source] reqwest::Error),

    #[error("Failed to read OpenWeather response body")]
    Body(#[source] reqwest::Error),

    #[error("OpenWeather request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}
