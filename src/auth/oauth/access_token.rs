//! Authorization code exchange.
//!
//! After the merchant approves the app, the redirect carries a one-time
//! `code`. The app redeems it with
//! `POST https://{store}.myshopify.com/admin/oauth/access_token`, passing
//! `client_id`, `client_secret` and `code` as query parameters with an empty
//! body. The JSON reply holds the permanent access token.
//!
//! The request itself is issued by
//! [`StoreApiClient::exchange_access_token`](crate::StoreApiClient::exchange_access_token);
//! this module owns the endpoint and the reply format.

use serde::Deserialize;

/// Path of the token endpoint on the store domain.
pub const ACCESS_TOKEN_PATH: &str = "/admin/oauth/access_token";

/// Reply of the token endpoint.
///
/// Only `access_token` is required; a reply without it (for example an
/// `{"error": "invalid_request"}` body) does not parse.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AccessTokenResponse {
    /// The permanent access token.
    pub access_token: String,
    /// The scopes actually granted, comma-separated.
    #[serde(default)]
    pub scope: Option<String>,
}

impl AccessTokenResponse {
    /// Parses a raw reply body, returning `None` for anything that is not a
    /// JSON object with a string `access_token`.
    #[must_use]
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

/// Builds the query string for redeeming `code`.
#[must_use]
pub(crate) fn exchange_query(client_id: &str, client_secret: &str, code: &str) -> String {
    [
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("code", code),
    ]
    .iter()
    .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
    .collect::<Vec<_>>()
    .join("&")
}
