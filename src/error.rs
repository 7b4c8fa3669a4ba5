//! Error type shared by every API call.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that may occur when interacting with the VinylDNS API.
///
/// Nothing is retried by the library; every variant reaches the caller of the
/// method that produced it.
#[derive(Debug, Error)]
pub enum Error {
    /// The request payload could not be serialized. No request was sent.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The request never produced a response (connect, TLS, timeout, ...).
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest [`Transport`](crate::Transport).
    #[error("transport error: {0}")]
    TransportMessage(String),

    /// The service answered with a non-2xx status.
    #[error("service returned {status}: {body}")]
    Service {
        /// HTTP status code.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// A 2xx response body did not match the expected JSON shape.
    #[error("failed to decode response body: {source}")]
    Decode {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// Raw response body, kept for diagnosing schema drift.
        body: String,
    },

    /// The base URL or a joined request path is not a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A header value taking part in the signature is not visible ASCII,
    /// or one computed while signing could not be encoded.
    #[error("invalid header value for {0}")]
    InvalidHeader(String),

    /// An update/delete payload did not carry the identifier it addresses.
    #[error("{0} is missing its id")]
    MissingId(&'static str),

    /// Client construction failed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the HTTP status for [`Error::Service`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw response body for service and decode errors.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Service { body, .. } | Error::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// `true` when the service answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// `true` when the transport gave up waiting for a response.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }
}
