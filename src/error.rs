//! Unified SDK error types.

use thiserror::Error;

use crate::shared::AmountError;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The JSON-RPC response carried an `error` member.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error(transparent)]
    WalletApi(#[from] WalletApiError),

    #[error("Invalid method: no method supplied")]
    InvalidMethod,

    #[error("Validation error: {0}")]
    Validation(String),

    /// The response body carried a `status` other than `OK`.
    #[error("Status is not OK: {status}{}", detail_suffix(.message))]
    StatusNotOk {
        status: String,
        message: Option<String>,
    },

    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    #[error("Amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Timeouts, refused connections and TLS failures, unchanged from reqwest.
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-2xx response on a transport without an error mapper.
    #[error("{status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Invalid header value for '{name}'")]
    InvalidHeader { name: &'static str },

    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),
}

impl HttpError {
    /// Whether the request failed because the configured timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Reqwest(e) if e.is_timeout())
    }
}

/// Errors mapped from WalletAPI HTTP statuses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletApiError {
    #[error("A parse error occured, or an error occured processing your request: {0}")]
    BadRequest(String),

    #[error("API key is missing or invalid")]
    Unauthorized,

    #[error("This operation requires a wallet to be open and one has not been opened")]
    NoWalletOpen,

    #[error("The item requested does not exist")]
    NotFound,

    #[error("An exception was thrown while processing the request. See the console for logs")]
    InternalError,

    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },
}
