//! Client error types

use thiserror::Error;

/// Errors raised while talking to the REST API
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure (connection refused, aborted fetch, ...)
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status
    #[error("Request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// Body could not be decoded into the expected record type
    #[error("Could not decode response from '{url}': {message}")]
    Decode { url: String, message: String },

    /// Operation needs an id the record does not carry
    #[error("{0} has no id")]
    MissingId(&'static str),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
