//! Error types for the prediction pipeline

use thiserror::Error;

/// Fallback shown when the page carries no recognizable prediction data
pub const NOT_FOUND_MESSAGE: &str = "Не удалось найти гороскоп. Попробуйте позже.";

/// Fallback shown when the prediction could not be fetched or is empty
pub const EMPTY_MESSAGE: &str = "Не удалось получить гороскоп. Попробуйте позже.";

/// Errors that can occur while fetching and extracting a prediction
#[derive(Debug, Error)]
pub enum HoroError {
    /// URL has invalid scheme
    #[error("Invalid URL: must start with http:// or https://")]
    InvalidUrl,

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// Request timed out waiting for first byte
    #[error("Request timed out: server did not respond")]
    Timeout,

    /// Failed to connect to server
    #[error("Failed to connect to server")]
    Connect(#[source] reqwest::Error),

    /// Other request error
    #[error("Request failed: {0}")]
    Request(String),

    /// The page has no prediction script element or assignment prefix
    #[error("Page carries no embedded prediction state")]
    ScriptMissing,

    /// The embedded payload is not valid JSON
    #[error("Embedded prediction state is not valid JSON")]
    MalformedState(#[source] serde_json::Error),

    /// Parsing succeeded but no readable prediction text was found
    #[error("Prediction has no readable text")]
    NoPrediction,
}

impl HoroError {
    /// Classify an error from reqwest
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HoroError::Timeout
        } else if err.is_connect() {
            HoroError::Connect(err)
        } else {
            HoroError::Request(err.to_string())
        }
    }

    /// The canned user-facing message substituted for this error.
    ///
    /// Page-shape problems (missing script, malformed payload) read as
    /// "not found"; everything else, including transport failures and an
    /// empty prediction, reads as "could not get".
    pub fn user_message(&self) -> &'static str {
        match self {
            HoroError::ScriptMissing | HoroError::MalformedState(_) => NOT_FOUND_MESSAGE,
            _ => EMPTY_MESSAGE,
        }
    }
}
