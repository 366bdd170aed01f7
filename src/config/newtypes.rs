//! Validated newtype wrappers for client configuration values.
//!
//! These wrappers check or normalize their contents on construction so the
//! client never has to re-validate raw strings.

use crate::error::ConfigError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Shopify API key.
///
/// # Example
///
/// ```rust
/// use shopify_store_client::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new API key. The value is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Shopify API secret, the shared key for HMAC signatures.
///
/// The `Debug` implementation masks the value so the secret does not leak
/// into logs.
///
/// ```rust
/// use shopify_store_client::ApiSecretKey;
///
/// let secret = ApiSecretKey::new("hush").unwrap();
/// assert_eq!(format!("{:?}", secret), "ApiSecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecretKey(String);

impl ApiSecretKey {
    /// Creates a new API secret. The value is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiSecretKey`] if the secret is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiSecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiSecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecretKey(*****)")
    }
}

/// A normalized store name, the `{store}` part of `{store}.myshopify.com`.
///
/// Normalization removes every `https://` and `.myshopify.com` occurrence,
/// ignoring ASCII case, so a bare name, a full domain and a full URL all
/// produce the same value. Normalizing an already normalized name is a no-op.
///
/// # Example
///
/// ```rust
/// use shopify_store_client::StoreName;
///
/// assert_eq!(StoreName::new("example").as_ref(), "example");
/// assert_eq!(StoreName::new("example.myshopify.com").as_ref(), "example");
/// assert_eq!(StoreName::new("HTTPS://example.MyShopify.com").as_ref(), "example");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreName(String);

impl StoreName {
    const PROTOCOL: &'static str = "https://";
    const SUFFIX: &'static str = ".myshopify.com";

    /// Normalizes `value` into a store name.
    ///
    /// Stripping repeats until nothing changes, so nested input such as
    /// `hthttps://tps://x` reduces to `x` and normalizing twice is a no-op.
    #[must_use]
    pub fn new(value: impl AsRef<str>) -> Self {
        let mut name = value.as_ref().to_string();
        loop {
            let stripped = remove_ignore_ascii_case(
                &remove_ignore_ascii_case(&name, Self::PROTOCOL),
                Self::SUFFIX,
            );
            if stripped == name {
                break;
            }
            name = stripped;
        }
        Self(name)
    }

    /// Returns the full store domain, e.g. `example.myshopify.com`.
    #[must_use]
    pub fn domain(&self) -> String {
        format!("{}{}", self.0, Self::SUFFIX)
    }

    /// Returns `true` if normalization left nothing behind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for StoreName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for StoreName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}

/// Removes every occurrence of the ASCII `pattern` from `value`, ignoring case.
fn remove_ignore_ascii_case(value: &str, pattern: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while !rest.is_empty() {
        let matches = rest
            .as_bytes()
            .get(..pattern.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(pattern.as_bytes()));

        if matches {
            // The matched bytes are ASCII, so the split lands on a char boundary.
            rest = rest.get(pattern.len()..).unwrap_or_default();
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
    }

    out
}

/// An origin that receives outbound requests instead of the store domain.
///
/// Useful behind a proxy, or to point the client at a local mock server.
/// A trailing `/` is dropped so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use shopify_store_client::ApiHost;
///
/// let host = ApiHost::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(host.as_ref(), "http://127.0.0.1:8080");
/// assert_eq!(host.scheme(), "http");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    url: String,
    scheme_end: usize,
}

impl ApiHost {
    /// Creates a validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the URL has no scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiHost { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiHost { url });
        }

        let host = &url[scheme_end + 3..];
        let host_end = host.find(['/', '?', '#']).unwrap_or(host.len());
        if host_end == 0 {
            return Err(ConfigError::InvalidApiHost { url });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (e.g. `http`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
