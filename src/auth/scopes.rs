//! OAuth access scope handling.
//!
//! [`AccessScope`] is the closed set of permission strings the admin API
//! understands; [`AccessScopes`] is the ordered list a client requests during
//! authorization. Scopes go over the wire as their literal strings, joined
//! with commas in insertion order.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! access_scopes {
    ($($(#[$meta:meta])* $variant:ident => $text:literal,)+) => {
        /// A single permission requested during OAuth authorization.
        ///
        /// # Example
        ///
        /// ```rust
        /// use shopify_store_client::AccessScope;
        ///
        /// let scope: AccessScope = "write_orders".parse().unwrap();
        /// assert_eq!(scope, AccessScope::WriteOrders);
        /// assert_eq!(scope.as_str(), "write_orders");
        /// ```
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum AccessScope {
            $($(#[$meta])* $variant,)+
        }

        impl AccessScope {
            /// Every known scope, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Returns the wire representation of the scope.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl FromStr for AccessScope {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(ConfigError::InvalidScope {
                        scope: other.to_string(),
                    }),
                }
            }
        }
    };
}

access_scopes! {
    /// Articles, blogs, comments, pages and redirects.
    ReadContent => "read_content",
    WriteContent => "write_content",
    /// Themes and theme assets.
    ReadThemes => "read_themes",
    WriteThemes => "write_themes",
    /// Products, variants and collections.
    ReadProducts => "read_products",
    WriteProducts => "write_products",
    /// Customers and saved searches.
    ReadCustomers => "read_customers",
    WriteCustomers => "write_customers",
    /// Orders, transactions and fulfillments.
    ReadOrders => "read_orders",
    WriteOrders => "write_orders",
    /// Script tags.
    ReadScriptTags => "read_script_tags",
    WriteScriptTags => "write_script_tags",
    /// Fulfillment services.
    ReadFulfillments => "read_fulfillments",
    WriteFulfillments => "write_fulfillments",
    /// Carrier services and shipping rates.
    ReadShipping => "read_shipping",
    WriteShipping => "write_shipping",
    /// Analytics reports.
    ReadAnalytics => "read_analytics",
    /// Staff accounts.
    ReadUsers => "read_users",
    WriteUsers => "write_users",
}

impl fmt::Display for AccessScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AccessScope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccessScope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// An ordered list of requested scopes.
///
/// Unlike a set, the list keeps insertion order and duplicates; the order is
/// only visible in the encoded authorization URL.
///
/// # Example
///
/// ```rust
/// use shopify_store_client::{AccessScope, AccessScopes};
///
/// let mut scopes = AccessScopes::new();
/// scopes.push(AccessScope::ReadProducts);
/// scopes.push(AccessScope::WriteOrders);
/// assert_eq!(scopes.to_string(), "read_products,write_orders");
///
/// let parsed: AccessScopes = "read_products, write_orders".parse().unwrap();
/// assert_eq!(parsed, scopes);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AccessScopes {
    scopes: Vec<AccessScope>,
}

impl AccessScopes {
    /// Creates an empty scope list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scope to the end of the list.
    pub fn push(&mut self, scope: AccessScope) {
        self.scopes.push(scope);
    }

    /// Returns `true` if no scopes are requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns the number of requested scopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns the scopes as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[AccessScope] {
        &self.scopes
    }

    /// Returns an iterator over the scopes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = AccessScope> + '_ {
        self.scopes.iter().copied()
    }
}

impl FromStr for AccessScopes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|scope| !scope.is_empty())
            .map(str::parse::<AccessScope>)
            .collect()
    }
}

impl FromIterator<AccessScope> for AccessScopes {
    fn from_iter<I: IntoIterator<Item = AccessScope>>(iter: I) -> Self {
        Self {
            scopes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AccessScopes {
    type Item = AccessScope;
    type IntoIter = std::vec::IntoIter<AccessScope>;

    fn into_iter(self) -> Self::IntoIter {
        self.scopes.into_iter()
    }
}

impl<'a> IntoIterator for &'a AccessScopes {
    type Item = AccessScope;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, AccessScope>>;

    fn into_iter(self) -> Self::IntoIter {
        self.scopes.iter().copied()
    }
}

impl From<Vec<AccessScope>> for AccessScopes {
    fn from(scopes: Vec<AccessScope>) -> Self {
        Self { scopes }
    }
}

impl<const N: usize> From<[AccessScope; N]> for AccessScopes {
    fn from(scopes: [AccessScope; N]) -> Self {
        Self {
            scopes: scopes.to_vec(),
        }
    }
}

impl fmt::Display for AccessScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .scopes
            .iter()
            .map(|scope| scope.as_str())
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

impl Serialize for AccessScopes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AccessScopes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
