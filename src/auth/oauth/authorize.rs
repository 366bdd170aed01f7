//! OAuth authorization URL generation.
//!
//! The first step of the authorization code flow redirects the merchant to
//! the store's consent screen:
//!
//! ```text
//! https://{store}.myshopify.com/admin/oauth/authorize
//!     ?client_id={api_key}
//!     &scope={comma-joined scopes}
//!     &redirect_uri={redirect_uri}
//!     &state={nonce}
//! ```
//!
//! Every value is percent-encoded. Scopes appear in the order they were
//! requested.

use std::fmt::Display;

use crate::auth::AccessScopes;
use crate::config::{ApiKey, StoreName};

/// Builds the authorization URL for `store`.
///
/// `nonce` is echoed back as the `state` parameter of the redirect; any
/// `Display` value works, including a generated [`Nonce`](super::Nonce).
///
/// # Example
///
/// ```rust
/// use shopify_store_client::{AccessScope, AccessScopes, ApiKey, StoreName};
/// use shopify_store_client::auth::oauth::authorization_url;
///
/// let url = authorization_url(
///     &StoreName::new("example"),
///     &ApiKey::new("KEY").unwrap(),
///     &AccessScopes::from([AccessScope::ReadProducts]),
///     "https://app.example.com/cb",
///     42,
/// );
///
/// assert_eq!(
///     url,
///     "https://example.myshopify.com/admin/oauth/authorize?client_id=KEY\
///      &scope=read_products&redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb&state=42"
/// );
/// ```
#[must_use]
pub fn authorization_url(
    store: &StoreName,
    api_key: &ApiKey,
    scopes: &AccessScopes,
    redirect_uri: &str,
    nonce: impl Display,
) -> String {
    let params = [
        ("client_id", api_key.as_ref().to_string()),
        ("scope", scopes.to_string()),
        ("redirect_uri", redirect_uri.to_string()),
        ("state", nonce.to_string()),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "https://{}/admin/oauth/authorize?{}",
        store.domain(),
        query_string
    )
}
