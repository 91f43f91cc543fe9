use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Defines errors that can occur when talking to the Elastic Email API.
///
/// Every error is terminal for the call that produced it. The client never
/// retries on its own; [`Error::is_retryable`] only helps callers decide.
///
/// # Example: Handling API Errors
///
/// ```ignore
/// match client.account().load().await {
///     Err(Error::Api(message)) => {
///         tracing::error!("Elastic Email rejected the call: {}", message);
///     }
///     Err(e) if e.is_transport() => {
///         tracing::warn!("Network problem: {}", e);
///     }
///     // ...
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The request method is not one of `GET` or `POST`.
    ///
    /// Raised while building the request, before any I/O happens.
    #[error("Unallowed request method type: {0}")]
    InvalidMethod(String),
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    /// Request timed out after the configured duration.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// Failure reported by a custom [`Transport`](crate::Transport) implementation.
    #[error("Transport error: {0}")]
    Transport(String),
    /// The server answered with a non-success HTTP status and a body that
    /// is not a response envelope.
    #[error("HTTP error (status {status_code}): {message}")]
    HttpStatus {
        /// HTTP status code (e.g., 404, 502)
        status_code: u16,
        /// Truncated response body
        message: String,
    },
    /// The response body is not valid JSON or has no `success` field.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// The envelope reported `success: false`.
    ///
    /// Carries the envelope's `error` string verbatim.
    #[error("API error: {0}")]
    Api(String),
    /// A typed result was requested but the envelope carried no `data`.
    #[error("Response has no payload: {0}")]
    MissingPayload(String),
    /// An attachment could not be opened for reading.
    #[error("Failed to open attachment {path:?}: {source}")]
    Attachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Failed to build the HTTP client.
    ///
    /// This typically only occurs in exceptional circumstances such as
    /// TLS backend initialization failures.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl Error {
    /// Returns `true` for connection, DNS, timeout and HTTP status failures.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Timeout(_) | Error::Transport(_) | Error::HttpStatus { .. }
        )
    }

    /// Returns `true` if this error is likely transient and the request may succeed on retry.
    ///
    /// - **HTTP errors**: Network issues, connection resets, TLS errors
    /// - **Timeouts**: Request took too long but may succeed with retry
    /// - **Server errors (5xx)** and **429**: Temporary server-side conditions
    ///
    /// API errors carry no status classification, so they are never
    /// considered retryable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use elasticemail_rs::Error;
    /// use std::time::Duration;
    ///
    /// assert!(Error::Timeout(Duration::from_secs(5)).is_retryable());
    /// assert!(!Error::Api("Invalid apikey".to_string()).is_retryable());
    /// ```
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::Timeout(_) | Error::Transport(_) => true,

            Error::HttpStatus { status_code, .. } => *status_code == 429 || *status_code >= 500,

            Error::InvalidMethod(_)
            | Error::Decode(_)
            | Error::Api(_)
            | Error::MissingPayload(_)
            | Error::Attachment { .. }
            | Error::InvalidInput(_)
            | Error::ClientBuild(_) => false,
        }
    }

    /// Returns the envelope's error message if this is an [`Error::Api`].
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Error::Api(message) => Some(message),
            _ => None,
        }
    }
}
