use std::io;

use crate::http::response::StatusCode;

/// A failure while handling a single request.
///
/// Each variant carries the status the client should see. None of them
/// outlive the connection they happened on.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// Unparsable request line or header line, or the stream ended early
    #[error("malformed request: {0}")]
    MalformedRequest(&'static str),
    /// Resource path contains `..`
    #[error("resource path rejected")]
    PathRejected,
    #[error("resource not found")]
    ResourceNotFound,
    /// The file exists but could not be opened or read
    #[error("resource unavailable: {0}")]
    ResourceUnavailable(#[source] io::Error),
    /// The static error page for a status is itself missing
    #[error("error page unavailable: {0}")]
    ErrorPageUnavailable(#[source] io::Error),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::MalformedRequest(_) => StatusCode::BadRequest,
            HttpError::PathRejected => StatusCode::Forbidden,
            HttpError::ResourceNotFound => StatusCode::NotFound,
            HttpError::ResourceUnavailable(_) => StatusCode::InternalServerError,
            HttpError::ErrorPageUnavailable(_) => StatusCode::InternalServerError,
        }
    }
}
