//! OAuth 2.0 authorization code flow pieces.
//!
//! - [`authorization_url`]: where to send the merchant to approve the app
//! - [`Nonce`]: a random `state` value for that URL
//! - [`AccessTokenResponse`]: the reply to the code-for-token exchange
//! - [`hmac`]: validation of the signed query parameters the platform sends
//!
//! The network half of the flow lives on
//! [`StoreApiClient`](crate::StoreApiClient), which memoizes the token it
//! obtains.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_store_client::{AccessScope, StoreApiClient};
//! use shopify_store_client::auth::oauth::Nonce;
//!
//! let mut client = StoreApiClient::new("api-key", "api-secret")?;
//! client.set_store("example").add_scope(AccessScope::ReadProducts);
//!
//! // Step 1: redirect the merchant
//! let nonce = Nonce::new();
//! let url = client.build_authorization_url("https://app.example.com/cb", &nonce)?;
//!
//! // Step 2: on the redirect, check the signature and the state
//! if client.is_valid_signature(&query) && nonce.matches(&query["state"]) {
//!     let token = client.exchange_access_token(Some(&query["code"])).await?;
//! }
//! ```

pub mod access_token;
mod authorize;
pub mod hmac;
mod state;

pub use access_token::AccessTokenResponse;
pub use authorize::authorization_url;
pub use state::Nonce;
