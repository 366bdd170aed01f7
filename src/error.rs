//! Configuration error types.
//!
//! All validated constructors return `Result<T, ConfigError>` so that a
//! misconfigured client fails before any request leaves the process.
//!
//! # Example
//!
//! ```rust
//! use shopify_store_client::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors raised while configuring a [`StoreApiClient`](crate::StoreApiClient).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Shopify API key.")]
    EmptyApiKey,

    /// API secret cannot be empty.
    #[error("API secret cannot be empty. Please provide a valid Shopify API secret.")]
    EmptyApiSecretKey,

    /// An operation needed the store name before `set_store` was called.
    #[error("No store configured. Call `set_store` before building URLs or making requests.")]
    MissingStore,

    /// A scope string is not one of the known access scopes.
    #[error("Unknown access scope '{scope}'.")]
    InvalidScope {
        /// The scope text that failed to parse.
        scope: String,
    },

    /// API host override is not a usable origin.
    #[error("Invalid API host '{url}'. Expected an origin with scheme (e.g., 'http://127.0.0.1:8080').")]
    InvalidApiHost {
        /// The rejected URL.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be empty"));
    }

    #[test]
    fn test_missing_store_error_mentions_setter() {
        let message = ConfigError::MissingStore.to_string();
        assert!(message.contains("set_store"));
    }

    #[test]
    fn test_invalid_scope_error_includes_scope() {
        let error = ConfigError::InvalidScope {
            scope: "read_everything".to_string(),
        };
        assert!(error.to_string().contains("read_everything"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingStore;
        let _: &dyn std::error::Error = &error;
    }
}
