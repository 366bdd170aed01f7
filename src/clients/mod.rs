//! HTTP client for the store admin API.
//!
//! - [`StoreApiClient`]: credentials, store state and the calls themselves
//! - [`HttpMethod`] / [`RequestBody`]: what a call sends
//! - [`http_response`]: how replies are decoded and error payloads detected
//! - [`ClientError`] / [`RequestError`]: how calls fail

pub mod errors;
pub mod http_request;
pub mod http_response;
mod store_client;

pub use errors::{ClientError, RequestError};
pub use http_request::{HttpMethod, RequestBody};
pub use store_client::{StoreApiClient, ACCESS_TOKEN_HEADER, SDK_VERSION};
