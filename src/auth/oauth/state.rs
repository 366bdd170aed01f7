//! Random `state` values for the authorization redirect.
//!
//! The platform echoes the `state` parameter back on the OAuth redirect.
//! Apps store the value before redirecting and compare it on the way back to
//! tie the callback to the request that started it.

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;

/// A random alphanumeric nonce for the authorization URL's `state` parameter.
///
/// # Example
///
/// ```rust
/// use shopify_store_client::auth::oauth::Nonce;
///
/// let nonce = Nonce::new();
/// assert_eq!(nonce.as_ref().len(), 15);
/// assert!(nonce.as_ref().chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nonce(String);

// Verify Nonce is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Nonce>();
};

impl Nonce {
    const LENGTH: usize = 15;

    /// Generates a nonce from the thread-local cryptographically secure RNG.
    #[must_use]
    pub fn new() -> Self {
        let value: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::LENGTH)
            .map(char::from)
            .collect();

        Self(value)
    }

    /// Wraps an existing value, e.g. one restored from the user's session.
    #[must_use]
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns `true` if `received` matches this nonce, in constant time.
    #[must_use]
    pub fn matches(&self, received: &str) -> bool {
        super::hmac::constant_time_compare(&self.0, received)
    }
}

impl Default for Nonce {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<str> for Nonce {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
