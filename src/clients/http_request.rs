//! Request-side types for store API calls.
//!
//! [`HttpMethod`] is the set of methods a call may use, and [`RequestBody`]
//! is what a call may carry: form fields or a raw string.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::clients::errors::ClientError;

/// HTTP methods supported by [`StoreApiClient::call`](crate::StoreApiClient::call).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Reads; a form body becomes the query string.
    Get,
    /// Writes; the body is sent as the request payload.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = ClientError;

    /// Parses a method name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            _ => Err(ClientError::UnsupportedMethod {
                method: s.to_string(),
            }),
        }
    }
}

/// The payload of a call.
///
/// # Example
///
/// ```rust
/// use shopify_store_client::RequestBody;
///
/// let form = RequestBody::form([("title", "Snow board"), ("vendor", "Acme & Co")]);
/// assert_eq!(form.encode(), "title=Snow%20board&vendor=Acme%20%26%20Co");
///
/// let raw = RequestBody::from(r#"{"product":{"title":"Snow board"}}"#);
/// assert_eq!(raw.encode(), r#"{"product":{"title":"Snow board"}}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// Key/value pairs, percent-encoded as `key=value&...` in this order.
    Form(Vec<(String, String)>),
    /// Sent exactly as given.
    Raw(String),
}

impl RequestBody {
    /// Builds a form body from key/value pairs, keeping their order.
    pub fn form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Form(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds a raw body.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// Returns `true` if encoding would produce an empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Form(pairs) => pairs.is_empty(),
            Self::Raw(text) => text.is_empty(),
        }
    }

    /// Encodes the body for the wire.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Form(pairs) => pairs
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&"),
            Self::Raw(text) => text.clone(),
        }
    }
}

/// Hash maps have no order of their own, so their pairs are encoded sorted by key.
impl<K, V, S> From<HashMap<K, V, S>> for RequestBody
where
    K: Into<String> + Ord,
    V: Into<String>,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        Self::form(map.into_iter().collect::<BTreeMap<_, _>>())
    }
}

impl<K, V> From<BTreeMap<K, V>> for RequestBody
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::form(map)
    }
}

impl<K, V> From<Vec<(K, V)>> for RequestBody
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::form(pairs)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        Self::raw(text)
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_parses_any_case() {
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("Post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
    }

    #[test]
    fn test_http_method_rejects_other_methods() {
        for method in ["PUT", "delete", "PATCH", "", "GETS"] {
            let result = method.parse::<HttpMethod>();
            assert!(
                matches!(result, Err(ClientError::UnsupportedMethod { method: ref m }) if m == method),
                "expected {method:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_http_method_display_is_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }

    #[test]
    fn test_form_body_percent_encodes_pairs_in_order() {
        let body = RequestBody::form([("b", "x y"), ("a", "1/2"), ("c=d", "é")]);
        assert_eq!(body.encode(), "b=x%20y&a=1%2F2&c%3Dd=%C3%A9");
    }

    #[test]
    fn test_hash_map_body_is_sorted_by_key() {
        let map = HashMap::from([("zeta", "1"), ("alpha", "2"), ("mid", "3")]);
        assert_eq!(RequestBody::from(map).encode(), "alpha=2&mid=3&zeta=1");
    }

    #[test]
    fn test_raw_body_is_verbatim() {
        let body = RequestBody::from(String::from("a=b&c= d"));
        assert_eq!(body.encode(), "a=b&c= d");
    }

    #[test]
    fn test_empty_bodies() {
        assert!(RequestBody::form(Vec::<(String, String)>::new()).is_empty());
        assert!(RequestBody::raw("").is_empty());
        assert!(!RequestBody::raw(" ").is_empty());
    }
}
