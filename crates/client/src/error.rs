use thiserror::Error;

/// Errors emitted by the API client.
///
/// Callers only distinguish "load failed" from "toggle failed"; the variants
/// here carry just enough detail for that plus a typed not-found.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    #[error("topic not found")]
    TopicNotFound,

    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
