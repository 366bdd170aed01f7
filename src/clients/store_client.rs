//! The store admin API client.
//!
//! [`StoreApiClient`] holds the app credentials and the per-store state needed
//! to authorize an app, redeem the OAuth code and call the admin API.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::auth::oauth::access_token::{self, AccessTokenResponse, ACCESS_TOKEN_PATH};
use crate::auth::oauth::authorization_url;
use crate::auth::oauth::hmac::validate_signature;
use crate::auth::{AccessScope, AccessScopes};
use crate::clients::errors::ClientError;
use crate::clients::http_request::{HttpMethod, RequestBody};
use crate::clients::http_response::{check_errors, decode_body};
use crate::config::{ApiHost, ApiKey, ApiSecretKey, StoreName};
use crate::error::ConfigError;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the access token on every call.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Client for a single store's REST admin API.
///
/// Configuration is done through chainable setters that take `&mut self`.
/// Calls take `&self`; only [`exchange_access_token`](Self::exchange_access_token)
/// needs `&mut self` because it caches the token it obtains. To share one
/// client between tasks, wrap it in a lock.
///
/// # Public and private apps
///
/// Public apps send the OAuth access token in the `X-Shopify-Access-Token`
/// header. Private apps authenticate with their key and secret as the
/// credentials of the store URI (see [`base_uri`](Self::base_uri)).
///
/// # Example
///
/// ```rust,ignore
/// use shopify_store_client::{AccessScope, RequestBody, StoreApiClient};
///
/// let mut client = StoreApiClient::new("api-key", "api-secret")?;
/// client
///     .set_store("example.myshopify.com")
///     .add_scope(AccessScope::ReadProducts)
///     .set_access_token("shpat_123");
///
/// let products = client.call("GET", "/admin/products.json", None).await?;
///
/// let body = RequestBody::form([("product[title]", "Snow board")]);
/// let created = client.call("POST", "/admin/products.json", Some(body)).await?;
/// ```
pub struct StoreApiClient {
    http: reqwest::Client,
    api_key: ApiKey,
    api_secret: ApiSecretKey,
    store: Option<StoreName>,
    access_token: Option<String>,
    scopes: AccessScopes,
    is_private_app: bool,
    api_host: Option<ApiHost>,
    user_agent_prefix: Option<String>,
}

// Verify StoreApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreApiClient>();
};

impl StoreApiClient {
    /// Creates a client for the app identified by `api_key` and `api_secret`.
    ///
    /// The client starts with no store, no token, no scopes and in public
    /// app mode.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] or [`ConfigError::EmptyApiSecretKey`]
    /// if either credential is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_store_client::StoreApiClient;
    ///
    /// let client = StoreApiClient::new("api-key", "api-secret").unwrap();
    /// assert!(client.store().is_none());
    /// assert!(client.access_token().is_none());
    /// assert!(client.scopes().is_empty());
    /// assert!(!client.is_private_app());
    /// ```
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            http: reqwest::Client::new(),
            api_key: ApiKey::new(api_key)?,
            api_secret: ApiSecretKey::new(api_secret)?,
            store: None,
            access_token: None,
            scopes: AccessScopes::new(),
            is_private_app: false,
            api_host: None,
            user_agent_prefix: None,
        })
    }

    /// Sets the target store.
    ///
    /// Accepts a bare name, a `.myshopify.com` domain or a full `https://` URL;
    /// see [`StoreName`] for the normalization rules.
    ///
    /// ```rust
    /// use shopify_store_client::StoreApiClient;
    ///
    /// let mut client = StoreApiClient::new("key", "secret").unwrap();
    /// client.set_store("https://example.myshopify.com");
    /// assert_eq!(client.store().unwrap().as_ref(), "example");
    /// ```
    pub fn set_store(&mut self, store: impl AsRef<str>) -> &mut Self {
        self.store = Some(StoreName::new(store));
        self
    }

    /// Returns the normalized store name, if one was set.
    #[must_use]
    pub const fn store(&self) -> Option<&StoreName> {
        self.store.as_ref()
    }

    /// Switches between private app (`true`) and public app (`false`) mode.
    pub fn set_private_mode(&mut self, is_private_app: bool) -> &mut Self {
        self.is_private_app = is_private_app;
        self
    }

    /// Returns `true` in private app mode.
    #[must_use]
    pub const fn is_private_app(&self) -> bool {
        self.is_private_app
    }

    /// Replaces the requested scopes.
    pub fn set_scopes(&mut self, scopes: impl IntoIterator<Item = AccessScope>) -> &mut Self {
        self.scopes = scopes.into_iter().collect();
        self
    }

    /// Appends one requested scope.
    pub fn add_scope(&mut self, scope: AccessScope) -> &mut Self {
        self.scopes.push(scope);
        self
    }

    /// Returns the requested scopes in insertion order.
    #[must_use]
    pub const fn scopes(&self) -> &AccessScopes {
        &self.scopes
    }

    /// Sets the access token directly, e.g. one persisted from an earlier exchange.
    pub fn set_access_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.access_token = Some(token.into());
        self
    }

    /// Returns the access token, if one was set or obtained.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Routes outbound requests to `api_host` instead of the store domain.
    ///
    /// The store domain is still sent in the `Host` header.
    pub fn set_api_host(&mut self, api_host: ApiHost) -> &mut Self {
        self.api_host = Some(api_host);
        self
    }

    /// Prepends `prefix` to the `User-Agent` header.
    pub fn set_user_agent_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the URL that starts the OAuth authorization flow.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingStore`] if no store is set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_store_client::{AccessScope, StoreApiClient};
    ///
    /// let mut client = StoreApiClient::new("KEY", "secret").unwrap();
    /// client
    ///     .set_store("example")
    ///     .add_scope(AccessScope::ReadProducts)
    ///     .add_scope(AccessScope::WriteOrders);
    ///
    /// let url = client
    ///     .build_authorization_url("https://app.example.com/cb", 12345)
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     url,
    ///     "https://example.myshopify.com/admin/oauth/authorize?client_id=KEY\
    ///      &scope=read_products%2Cwrite_orders\
    ///      &redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb&state=12345"
    /// );
    /// ```
    pub fn build_authorization_url(
        &self,
        redirect_uri: &str,
        nonce: impl fmt::Display,
    ) -> Result<String, ConfigError> {
        let store = self.require_store()?;
        Ok(authorization_url(
            store,
            &self.api_key,
            &self.scopes,
            redirect_uri,
            nonce,
        ))
    }

    /// Returns the store's base URI.
    ///
    /// In private app mode the API key and secret are embedded as URI
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingStore`] if no store is set.
    ///
    /// ```rust
    /// use shopify_store_client::StoreApiClient;
    ///
    /// let mut client = StoreApiClient::new("K", "S").unwrap();
    /// client.set_store("example");
    /// assert_eq!(client.base_uri().unwrap(), "https://example.myshopify.com");
    ///
    /// client.set_private_mode(true);
    /// assert_eq!(client.base_uri().unwrap(), "https://K:S@example.myshopify.com");
    /// ```
    pub fn base_uri(&self) -> Result<String, ConfigError> {
        let store = self.require_store()?;
        let credentials = if self.is_private_app {
            format!("{}:{}@", self.api_key.as_ref(), self.api_secret.as_ref())
        } else {
            String::new()
        };
        Ok(format!("https://{credentials}{}", store.domain()))
    }

    /// Returns the headers sent with every call.
    ///
    /// The access token header is always present; it is empty when no token
    /// is known.
    #[must_use]
    pub fn default_headers(&self) -> HashMap<String, String> {
        let user_agent_prefix = self
            .user_agent_prefix
            .as_ref()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Store API Client v{SDK_VERSION} | Rust");

        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), user_agent);
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert(
            ACCESS_TOKEN_HEADER.to_string(),
            self.access_token.clone().unwrap_or_default(),
        );

        if self.api_host.is_some() {
            if let Some(store) = self.store.as_ref().filter(|store| !store.is_empty()) {
                headers.insert("Host".to_string(), store.domain());
            }
        }

        headers
    }

    /// Redeems an OAuth authorization code for an access token.
    ///
    /// If a token is already known, or `code` is `None`, the known token (if
    /// any) is returned without touching the network. Otherwise exactly one
    /// request is made and a successfully obtained token is cached, so a code
    /// is never redeemed twice through the same client.
    ///
    /// `Ok(None)` means the app is not authorized: either no code (or an empty
    /// one) was given, or the reply carried no `access_token`. The cached state is left
    /// untouched in that case.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Config`] if no store is set and a request is needed
    /// - [`ClientError::Transport`] if the request fails; it is not retried
    pub async fn exchange_access_token(
        &mut self,
        code: Option<&str>,
    ) -> Result<Option<String>, ClientError> {
        let code = code.filter(|code| !code.is_empty());
        let code = match (self.access_token.as_ref(), code) {
            (Some(_), _) | (None, None) => return Ok(self.access_token.clone()),
            (None, Some(code)) => code,
        };

        let store = self.require_store()?;
        let url = format!(
            "{}{}?{}",
            self.origin(store),
            ACCESS_TOKEN_PATH,
            access_token::exchange_query(self.api_key.as_ref(), self.api_secret.as_ref(), code)
        );

        tracing::debug!(store = %store, "Exchanging authorization code for access token");

        let mut request = self.http.post(&url).body(String::new());
        for (key, value) in self.default_headers() {
            if key != ACCESS_TOKEN_HEADER {
                request = request.header(key, value);
            }
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        match AccessTokenResponse::parse(&body) {
            Some(reply) => {
                self.access_token = Some(reply.access_token.clone());
                Ok(Some(reply.access_token))
            }
            None => {
                tracing::debug!(
                    status,
                    "Access token exchange returned no access_token; app remains unauthorized"
                );
                Ok(None)
            }
        }
    }

    /// Calls the admin API and returns the decoded JSON reply.
    ///
    /// `method` is matched case-insensitively; only `GET` and `POST` are
    /// supported. `path` is appended to the store URI as given, e.g.
    /// `/admin/products.json`.
    ///
    /// For `POST` a form body is sent form-encoded and a raw body verbatim.
    /// For `GET` a non-empty body is encoded into the query string.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnsupportedMethod`] for any other method; nothing is sent
    /// - [`ClientError::Config`] if no store is set
    /// - [`ClientError::Transport`] if the request fails
    /// - [`ClientError::InvalidResponse`] if the reply is not JSON
    /// - [`ClientError::Request`] if the reply carries an `errors` field
    pub async fn call(
        &self,
        method: &str,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<Value, ClientError> {
        let method: HttpMethod = method.parse()?;
        let store = self.require_store()?;
        let body = body.filter(|body| !body.is_empty());

        let mut url = format!("{}{}", self.origin(store), path);

        tracing::debug!(method = %method, path, "Sending request to store API");

        let mut request = match method {
            HttpMethod::Get => {
                if let Some(body) = &body {
                    url.push(if url.contains('?') { '&' } else { '?' });
                    url.push_str(&body.encode());
                }
                self.http.get(&url)
            }
            HttpMethod::Post => {
                let mut request = self.http.post(&url);
                if let Some(body) = &body {
                    if matches!(body, RequestBody::Form(_)) {
                        request = request.header("Content-Type", FORM_CONTENT_TYPE);
                    }
                    request = request.body(body.encode());
                }
                request
            }
        };

        for (key, value) in self.default_headers() {
            request = request.header(key, value);
        }

        if self.is_private_app {
            request = request.basic_auth(self.api_key.as_ref(), Some(self.api_secret.as_ref()));
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        let decoded = decode_body(status, &text)?;
        Ok(check_errors(decoded)?)
    }

    /// Returns `true` if `query` carries a valid `hmac` signature made with
    /// this app's secret.
    ///
    /// `query` is the already parsed query string of a request the platform
    /// sent to the app, such as the OAuth redirect. A missing or empty `hmac`
    /// is never valid.
    #[must_use]
    pub fn is_valid_signature<S: std::hash::BuildHasher>(
        &self,
        query: &HashMap<String, String, S>,
    ) -> bool {
        validate_signature(query, self.api_secret.as_ref())
    }

    fn require_store(&self) -> Result<&StoreName, ConfigError> {
        self.store
            .as_ref()
            .filter(|store| !store.is_empty())
            .ok_or(ConfigError::MissingStore)
    }

    /// Scheme and host requests are sent to.
    fn origin(&self, store: &StoreName) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}", store.domain()),
            |host| host.as_ref().to_string(),
        )
    }
}

impl fmt::Debug for StoreApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreApiClient")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret)
            .field("store", &self.store)
            .field("access_token", &self.access_token.as_ref().map(|_| "*****"))
            .field("scopes", &self.scopes)
            .field("is_private_app", &self.is_private_app)
            .field("api_host", &self.api_host)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StoreApiClient {
        StoreApiClient::new("KEY", "hush").unwrap()
    }

    #[test]
    fn test_new_rejects_empty_credentials() {
        assert!(matches!(
            StoreApiClient::new("", "secret"),
            Err(ConfigError::EmptyApiKey)
        ));
        assert!(matches!(
            StoreApiClient::new("key", ""),
            Err(ConfigError::EmptyApiSecretKey)
        ));
    }

    #[test]
    fn test_set_store_normalizes_every_form() {
        for input in [
            "example",
            "example.myshopify.com",
            "https://example.myshopify.com",
        ] {
            let mut client = client();
            client.set_store(input);
            assert_eq!(client.store().unwrap().as_ref(), "example", "input {input}");
        }
    }

    #[test]
    fn test_add_scope_preserves_insertion_order() {
        let mut client = client();
        client
            .add_scope(AccessScope::ReadProducts)
            .add_scope(AccessScope::WriteOrders);

        assert_eq!(
            client.scopes().as_slice(),
            &[AccessScope::ReadProducts, AccessScope::WriteOrders]
        );
    }

    #[test]
    fn test_set_scopes_replaces_list() {
        let mut client = client();
        client
            .add_scope(AccessScope::ReadProducts)
            .set_scopes([AccessScope::ReadThemes]);

        assert_eq!(client.scopes().as_slice(), &[AccessScope::ReadThemes]);
    }

    #[test]
    fn test_build_authorization_url_exact() {
        let mut client = client();
        client.set_store("example").set_scopes([
            AccessScope::ReadProducts,
            AccessScope::WriteOrders,
        ]);

        assert_eq!(
            client
                .build_authorization_url("https://app.example.com/cb", 12345)
                .unwrap(),
            "https://example.myshopify.com/admin/oauth/authorize?client_id=KEY\
             &scope=read_products%2Cwrite_orders\
             &redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb&state=12345"
        );
    }

    #[test]
    fn test_build_authorization_url_requires_store() {
        let result = client().build_authorization_url("https://app.example.com/cb", 1);
        assert_eq!(result, Err(ConfigError::MissingStore));
    }

    #[test]
    fn test_empty_store_counts_as_missing() {
        let mut client = client();
        client.set_store("https://.myshopify.com");
        assert_eq!(client.base_uri(), Err(ConfigError::MissingStore));
    }

    #[test]
    fn test_base_uri_by_mode() {
        let mut client = StoreApiClient::new("K", "S").unwrap();
        client.set_store("example");
        assert_eq!(client.base_uri().unwrap(), "https://example.myshopify.com");

        client.set_private_mode(true);
        assert_eq!(
            client.base_uri().unwrap(),
            "https://K:S@example.myshopify.com"
        );
    }

    #[test]
    fn test_default_headers_always_carry_token_header() {
        let mut client = client();
        assert_eq!(
            client.default_headers().get(ACCESS_TOKEN_HEADER),
            Some(&String::new())
        );

        client.set_access_token("shpat_123");
        assert_eq!(
            client.default_headers().get(ACCESS_TOKEN_HEADER),
            Some(&"shpat_123".to_string())
        );
    }

    #[test]
    fn test_default_headers_user_agent() {
        let mut client = client();
        let headers = client.default_headers();
        assert!(headers["User-Agent"].contains("Store API Client v"));
        assert_eq!(headers["Accept"], "application/json");

        client.set_user_agent_prefix("MyApp/1.0");
        assert!(client.default_headers()["User-Agent"].starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_host_header_only_with_api_host() {
        let mut client = client();
        client.set_store("example");
        assert!(!client.default_headers().contains_key("Host"));

        client.set_api_host(ApiHost::new("http://127.0.0.1:9999").unwrap());
        assert_eq!(client.default_headers()["Host"], "example.myshopify.com");
    }

    #[test]
    fn test_is_valid_signature_uses_api_secret() {
        let query = HashMap::from([
            ("shop".to_string(), "example.myshopify.com".to_string()),
            ("timestamp".to_string(), "1317327971".to_string()),
            (
                "hmac".to_string(),
                "481bffd0b8ecc8f649a79dd149b765ec5551b240792b55967b0fdfeaa1e3702d".to_string(),
            ),
        ]);

        assert!(client().is_valid_signature(&query));
        assert!(!StoreApiClient::new("KEY", "other")
            .unwrap()
            .is_valid_signature(&query));
    }

    #[test]
    fn test_debug_masks_secrets() {
        let mut client = client();
        client.set_access_token("shpat_secret_token");
        let debug = format!("{client:?}");
        assert!(!debug.contains("hush"));
        assert!(!debug.contains("shpat_secret_token"));
    }

    #[tokio::test]
    async fn test_exchange_without_code_returns_cached_state() {
        let mut client = client();
        assert_eq!(client.exchange_access_token(None).await.unwrap(), None);

        client.set_access_token("shpat_123");
        assert_eq!(
            client.exchange_access_token(Some("code")).await.unwrap(),
            Some("shpat_123".to_string())
        );
    }

    #[tokio::test]
    async fn test_exchange_with_code_requires_store() {
        let mut client = client();
        let result = client.exchange_access_token(Some("code")).await;
        assert!(matches!(
            result,
            Err(ClientError::Config(ConfigError::MissingStore))
        ));
    }

    #[tokio::test]
    async fn test_call_rejects_unsupported_method_before_sending() {
        // No store is set, so reaching the network would fail differently.
        let result = client().call("DELETE", "/admin/products/1.json", None).await;
        assert!(matches!(
            result,
            Err(ClientError::UnsupportedMethod { method }) if method == "DELETE"
        ));
    }
}
