//! Client error types.

use crate::response::Response;

/// Errors that terminate a call.
///
/// A 422 reply is not an error here: its validation errors are returned as data
/// on the [`Response`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or the reply could not be read.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request body could not be encoded; nothing was sent.
    #[error("encode error: {0}")]
    Encode(#[from] quick_xml::SeError),

    /// A successful reply could not be decoded.
    #[error("decode error (HTTP {}): {source}", .response.status())]
    Decode {
        /// The reply, still inspectable.
        response: Box<Response>,
        /// The underlying XML error.
        source: quick_xml::DeError,
    },

    /// A paginated request returned an error status.
    #[error("API error: HTTP {}", .response.status())]
    Status {
        /// The reply, including any validation errors.
        response: Box<Response>,
    },

    /// The HTTP method name is not valid.
    #[error("invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// A header value is not valid.
    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// A URL could not be built.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
