//! HTTP transport layer.
//!
//! [`ApiRequest`] describes one logical call (method, path, payload, auth mode);
//! [`HttpTransport`] turns it into a reqwest request carrying the credential
//! headers and performs a single round-trip. Retries live in the client.

mod http;
mod request;

pub use http::{
    HttpTransport, HEADER_PUBLIC_API_KEY, HEADER_PUBLIC_API_KEY_LEGACY, JSON_CONTENT_TYPE,
};
pub use request::{ApiRequest, AuthMode};
