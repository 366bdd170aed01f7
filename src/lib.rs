//! # Shopify Store Client
//!
//! A thin client for a single store's REST admin API: OAuth authorization
//! URLs, authorization code exchange, HMAC validation of signed query
//! parameters, and authenticated GET/POST calls returning decoded JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_store_client::{AccessScope, StoreApiClient};
//!
//! let mut client = StoreApiClient::new("api-key", "api-secret").unwrap();
//! client
//!     .set_store("example.myshopify.com")
//!     .add_scope(AccessScope::ReadProducts)
//!     .add_scope(AccessScope::WriteOrders);
//!
//! let url = client
//!     .build_authorization_url("https://app.example.com/auth/callback", "nonce")
//!     .unwrap();
//! assert!(url.starts_with("https://example.myshopify.com/admin/oauth/authorize?"));
//! ```
//!
//! ## OAuth
//!
//! ```rust,ignore
//! use shopify_store_client::auth::oauth::Nonce;
//!
//! // Redirect the merchant, remembering the nonce
//! let nonce = Nonce::new();
//! let url = client.build_authorization_url("https://app.example.com/auth/callback", &nonce)?;
//!
//! // On the redirect back, check the signature and state, then redeem the code
//! if client.is_valid_signature(&query) && nonce.matches(&query["state"]) {
//!     match client.exchange_access_token(Some(&query["code"])).await? {
//!         Some(token) => save_token(&token),
//!         None => println!("Not authorized"),
//!     }
//! }
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use shopify_store_client::RequestBody;
//!
//! client.set_access_token(stored_token);
//!
//! let shop = client.call("GET", "/admin/shop.json", None).await?;
//! let orders = client
//!     .call("GET", "/admin/orders.json", Some(RequestBody::form([("status", "any")])))
//!     .await?;
//! ```
//!
//! ## Private Apps
//!
//! Private apps skip OAuth; their key and secret authenticate every call:
//!
//! ```rust
//! use shopify_store_client::StoreApiClient;
//!
//! let mut client = StoreApiClient::new("K", "S").unwrap();
//! client.set_store("example").set_private_mode(true);
//! assert_eq!(client.base_uri().unwrap(), "https://K:S@example.myshopify.com");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: every client owns its configuration
//! - **Fail-fast validation**: credentials and store are checked before any request
//! - **No hidden retries**: each operation makes at most one request

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

pub use auth::{AccessScope, AccessScopes};
pub use clients::{ClientError, HttpMethod, RequestBody, RequestError, StoreApiClient};
pub use config::{ApiHost, ApiKey, ApiSecretKey, StoreName};
pub use error::ConfigError;
