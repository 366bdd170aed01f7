//! Error types for store API calls.
//!
//! - [`RequestError`]: the API answered with an `errors` payload
//! - [`ClientError`]: everything a call or token exchange can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_store_client::ClientError;
//!
//! match client.call("POST", "/admin/products.json", Some(body)).await {
//!     Ok(json) => println!("Created: {json}"),
//!     Err(ClientError::Request(e)) => eprintln!("Rejected:\n{}", e.message),
//!     Err(ClientError::UnsupportedMethod { method }) => eprintln!("No {method} support"),
//!     Err(other) => eprintln!("Call failed: {other}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;

/// The API reported one or more errors in the response body.
///
/// `message` holds one line per reported error, as produced by
/// [`error_message`](crate::clients::http_response::error_message).
///
/// ```rust
/// use shopify_store_client::RequestError;
///
/// let error = RequestError::new("title: can't be blank");
/// assert_eq!(error.to_string(), "title: can't be blank");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestError {
    /// The combined error text.
    pub message: String,
}

impl RequestError {
    /// Creates a request error from its message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Unified error type for client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client is missing configuration the operation needs.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The API answered with an `errors` payload.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Only GET and POST are supported; nothing was sent.
    #[error("Unsupported HTTP method '{method}'. Only GET and POST are supported.")]
    UnsupportedMethod {
        /// The method as it was passed in.
        method: String,
    },

    /// The response body could not be decoded as JSON.
    #[error("Response with status {status} is not valid JSON: {source}")]
    InvalidResponse {
        /// HTTP status code of the response.
        status: u16,
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// Network or connection error from the transport.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

// Verify ClientError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientError>();
};
