//! Authentication types.
//!
//! - [`AccessScope`] / [`AccessScopes`]: the permissions an app requests
//! - [`oauth`]: authorization URL, token reply and signature validation
//!
//! Public apps authenticate each call with the access token obtained through
//! OAuth. Private apps skip OAuth and embed the API key and secret in the
//! request URI instead.

pub mod oauth;
mod scopes;

pub use scopes::{AccessScope, AccessScopes};
