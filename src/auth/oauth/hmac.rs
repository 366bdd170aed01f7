//! HMAC validation for signed query parameters.
//!
//! Requests the platform sends back to an app (the OAuth redirect, app proxy
//! and launch requests) carry an `hmac` query parameter. It is the lowercase
//! hex HMAC-SHA256 of the remaining parameters, sorted by key and joined as
//! `key=value` pairs with `&`, keyed by the app's API secret.
//!
//! All digest comparisons are constant-time.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use shopify_store_client::auth::oauth::hmac::{compute_signature, validate_signature};
//!
//! let mut query = HashMap::new();
//! query.insert("shop".to_string(), "example.myshopify.com".to_string());
//! query.insert("timestamp".to_string(), "1317327971".to_string());
//!
//! let digest = compute_signature("shop=example.myshopify.com&timestamp=1317327971", "hush");
//! query.insert("hmac".to_string(), digest);
//!
//! assert!(validate_signature(&query, "hush"));
//! ```

use std::collections::HashMap;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Name of the query parameter carrying the signature.
pub const HMAC_PARAM: &str = "hmac";

/// Computes an HMAC-SHA256 signature for the given message.
///
/// The signature is returned as a lowercase hexadecimal string.
///
/// # Example
///
/// ```rust
/// use shopify_store_client::auth::oauth::hmac::compute_signature;
///
/// let sig = compute_signature("test-message", "secret-key");
/// assert_eq!(sig.len(), 64);
/// ```
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(message: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Performs constant-time comparison of two strings.
///
/// Strings of different lengths compare unequal.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Builds the message the signature is computed over.
///
/// Every parameter except `hmac` is included, sorted ascending by key and
/// joined as raw `key=value` pairs with `&`. Values are not re-encoded.
#[must_use]
pub fn signable_string<S: std::hash::BuildHasher>(query: &HashMap<String, String, S>) -> String {
    let mut pairs: Vec<(&str, &str)> = query
        .iter()
        .filter(|(key, _)| key.as_str() != HMAC_PARAM)
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Validates the `hmac` parameter of an already parsed query string.
///
/// Fails closed: a missing or empty `hmac` is never valid.
#[must_use]
pub fn validate_signature<S: std::hash::BuildHasher>(
    query: &HashMap<String, String, S>,
    secret: &str,
) -> bool {
    let Some(received) = query.get(HMAC_PARAM).filter(|hmac| !hmac.is_empty()) else {
        return false;
    };

    let computed = compute_signature(&signable_string(query), secret);
    constant_time_compare(&computed, received)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "hush";
    const VALID_DIGEST: &str = "481bffd0b8ecc8f649a79dd149b765ec5551b240792b55967b0fdfeaa1e3702d";

    fn signed_query() -> HashMap<String, String> {
        HashMap::from([
            ("shop".to_string(), "example.myshopify.com".to_string()),
            ("timestamp".to_string(), "1317327971".to_string()),
            ("hmac".to_string(), VALID_DIGEST.to_string()),
        ])
    }

    #[test]
    fn test_compute_signature_matches_known_value() {
        // HMAC-SHA256("message", "key")
        let sig = compute_signature("message", "key");
        assert_eq!(
            sig,
            "6e9ef29b75fffc5b7abae527d58fdadb2fe42e7219011976917343065f58ed4a"
        );
    }

    #[test]
    fn test_compute_signature_is_lowercase_hex() {
        let sig = compute_signature("test", "secret");
        assert_eq!(sig.len(), 64);
        assert!(sig
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_signable_string_sorts_and_skips_hmac() {
        let query = HashMap::from([
            ("timestamp".to_string(), "1".to_string()),
            ("hmac".to_string(), "ignored".to_string()),
            ("code".to_string(), "abc".to_string()),
            ("shop".to_string(), "s.myshopify.com".to_string()),
        ]);

        assert_eq!(
            signable_string(&query),
            "code=abc&shop=s.myshopify.com&timestamp=1"
        );
    }

    #[test]
    fn test_validate_signature_accepts_known_digest() {
        assert_eq!(
            compute_signature("shop=example.myshopify.com&timestamp=1317327971", SECRET),
            VALID_DIGEST
        );
        assert!(validate_signature(&signed_query(), SECRET));
    }

    #[test]
    fn test_validate_signature_rejects_altered_value() {
        let mut query = signed_query();
        query.insert("timestamp".to_string(), "1317327972".to_string());
        assert!(!validate_signature(&query, SECRET));
    }

    #[test]
    fn test_validate_signature_rejects_altered_digest() {
        let mut query = signed_query();
        let mut tampered = VALID_DIGEST.to_string();
        tampered.replace_range(..1, "5");
        query.insert("hmac".to_string(), tampered);
        assert!(!validate_signature(&query, SECRET));
    }

    #[test]
    fn test_validate_signature_rejects_wrong_secret() {
        assert!(!validate_signature(&signed_query(), "not-hush"));
    }

    #[test]
    fn test_validate_signature_fails_closed_without_hmac() {
        let mut query = signed_query();
        query.remove("hmac");
        assert!(!validate_signature(&query, SECRET));

        query.insert("hmac".to_string(), String::new());
        assert!(!validate_signature(&query, SECRET));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc123", "abc123"));
        assert!(!constant_time_compare("abc123", "abc124"));
        assert!(!constant_time_compare("abc", "abcd"));
        assert!(!constant_time_compare("ABC", "abc"));
    }
}
