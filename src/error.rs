use thiserror::Error;

/// Errors from the MusicBrainz and YouTube lookup clients.
///
/// None of these are handled locally: handlers propagate them into Rocket's
/// `Debug` responder, which answers with the generic 500 page.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Request error: {0}")]
    RequestError(reqwest::Error),
    #[error("Unexpected status from upstream service: {0}")]
    Status(reqwest::StatusCode),
    #[error("Could not decode upstream response: {0}")]
    Parse(String),
    #[error("Upstream response missing expected field: {0}")]
    MissingField(&'static str),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::RequestError(err)
    }
}
