//! Error types for the request pipeline.
//!
//! # Design
//! `NetworkError` is the closed taxonomy produced by this crate: status-code
//! classification, decode failures and URL parsing. Each variant renders a
//! fixed description, and equality is structural so callers can assert on
//! exact variants.
//!
//! Transport failures are not part of the taxonomy. `ExecuteError` keeps
//! them in a separate variant, untouched, next to the taxonomy.

/// Errors produced by `Request` itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The response body could not be decoded into the requested type.
    #[error("Decode error")]
    Decode,

    /// The string could not be parsed as an absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The transport returned something that is not an HTTP response.
    #[error("No Response")]
    NoResponse,

    /// The server returned 401.
    #[error("Unauthorized")]
    Unauthorized,

    /// The server returned a status outside 200..=599 or in the 3xx range.
    #[error("Unexpected Status Code: {0}")]
    UnexpectedStatusCode(u16),

    /// Anything else, e.g. the request body failed to serialize.
    #[error("Unexpected Error: {0}")]
    Unknown(String),

    /// The server returned 403.
    #[error("Forbidden")]
    Forbidden,

    /// The server returned a 4xx other than 401 and 403.
    #[error("Bad Request")]
    BadRequest,

    /// The server returned a 5xx. The name is historical: any server error
    /// lands here, not only lost connectivity.
    #[error("No Connection")]
    NoConnection,
}

impl NetworkError {
    /// Human-readable description, identical to the `Display` output.
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// Classify an HTTP status code.
    ///
    /// Precedence matters: 401 and 403 are matched before the generic
    /// 4xx range.
    pub fn from_status(status: u16) -> Result<(), NetworkError> {
        match status {
            200..=299 => Ok(()),
            401 => Err(NetworkError::Unauthorized),
            403 => Err(NetworkError::Forbidden),
            400..=499 => Err(NetworkError::BadRequest),
            500..=599 => Err(NetworkError::NoConnection),
            other => Err(NetworkError::UnexpectedStatusCode(other)),
        }
    }
}

/// Failure of a single `execute` call.
///
/// `E` is the transport's own error type, returned exactly as the transport
/// produced it.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ExecuteError<E> {
    /// The transport failed before a response was available.
    #[error(transparent)]
    Transport(E),

    /// The request could not be built, or the response was rejected.
    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl<E> ExecuteError<E> {
    /// The taxonomy variant, if this is not a transport failure.
    pub fn network(&self) -> Option<&NetworkError> {
        match self {
            ExecuteError::Network(err) => Some(err),
            ExecuteError::Transport(_) => None,
        }
    }

    /// The transport error, if the transport failed.
    pub fn transport(&self) -> Option<&E> {
        match self {
            ExecuteError::Transport(err) => Some(err),
            ExecuteError::Network(_) => None,
        }
    }
}
