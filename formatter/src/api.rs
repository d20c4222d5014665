use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Terminal failure modes of a format request. None of them is retried;
/// each maps to a distinct status code, and the `Display` rendering is
/// the response body in both deployment shapes.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Invalid format type. Use 'iso' or 'epoch'.")]
    InvalidFormat,

    #[error("Service1 is unavailable.")]
    UpstreamUnavailable,

    #[error("Invalid timestamp format from Service1: {0}")]
    UpstreamMalformed(String),
}

impl IntoResponse for FormatError {
    fn into_response(self) -> Response {
        match self {
            FormatError::InvalidFormat => (StatusCode::BAD_REQUEST, self.to_string()),

            FormatError::UpstreamUnavailable => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),

            FormatError::UpstreamMalformed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        }
        .into_response()
    }
}
