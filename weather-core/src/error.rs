use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ForecastError>;

/// Everything that can go wrong between loading the config and rendering a line.
///
/// A location that the API does not know is not in here; see
/// [`FetchOutcome::NotFound`](crate::FetchOutcome::NotFound).
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("environment variable {0} is not set")]
    MissingApiKey(&'static str),

    #[error("failed to reach forecast service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("forecast service rejected the API key: {body}")]
    Authentication { body: String },

    #[error("forecast request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed forecast response: {0}")]
    MalformedResponse(String),
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::MalformedResponse(err.to_string())
    }
}
