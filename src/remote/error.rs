//! Failure taxonomy for remote catalog operations.
//!
//! Every remote call ends in exactly one of three ways when it does not
//! succeed: the request never completed, the server answered outside the
//! 2xx range, or the body could not be parsed into the expected shape.

use thiserror::Error;

/// Errors produced by [`CatalogApi`](super::CatalogApi) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The connection could not be established or was interrupted.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server responded outside the success range. The payload, if any,
    /// is ignored; the status alone classifies the failure.
    #[error("request failed: {status} {status_text}")]
    Request { status: u16, status_text: String },

    /// The response body could not be parsed into the expected shape.
    #[error("decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a `Request` error from an HTTP status code.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        ApiError::Request {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::from_status(status)
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_carries_status_and_text() {
        let err = ApiError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err,
            ApiError::Request {
                status: 500,
                status_text: "Internal Server Error".to_string()
            }
        );
        assert_eq!(err.to_string(), "request failed: 500 Internal Server Error");
    }

    #[test]
    fn transport_error_display() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "transport failed: connection refused");
    }

    #[test]
    fn decode_error_display() {
        let err = ApiError::Decode("missing field `title`".to_string());
        assert_eq!(err.to_string(), "decode failed: missing field `title`");
    }
}
