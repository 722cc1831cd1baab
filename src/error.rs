//! Errors returned by every [`CasdoorClient`](crate::CasdoorClient) operation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a usable response: connection failure,
    /// timeout, or a request that could not be built.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response body is not JSON or does not have the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The envelope was decoded but its status is not `ok`.
    #[error("server returned status '{status}': {msg}")]
    Api { status: String, msg: String },

    /// Token exchange or token verification was rejected.
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The configured certificate cannot be used as a verification key.
    #[error("invalid certificate: {0}")]
    Certificate(#[source] jsonwebtoken::errors::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
