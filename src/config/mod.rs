//! Configuration types for the store client.
//!
//! Configuration is instance-based: each [`StoreApiClient`](crate::StoreApiClient)
//! owns its credentials and settings, and there is no global state and no
//! environment lookup. The values are carried by validated newtypes:
//!
//! - [`ApiKey`]: the app's API key (the OAuth `client_id`)
//! - [`ApiSecretKey`]: the shared secret, masked in debug output
//! - [`StoreName`]: a normalized store name
//! - [`ApiHost`]: an optional origin override for outbound requests
//!
//! # Example
//!
//! ```rust
//! use shopify_store_client::{ApiKey, ApiSecretKey, StoreName};
//!
//! let key = ApiKey::new("my-api-key").unwrap();
//! let secret = ApiSecretKey::new("my-secret").unwrap();
//! let store = StoreName::new("https://my-store.myshopify.com");
//!
//! assert_eq!(store.as_ref(), "my-store");
//! ```

mod newtypes;

pub use newtypes::{ApiHost, ApiKey, ApiSecretKey, StoreName};
