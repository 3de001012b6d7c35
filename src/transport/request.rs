//! Request descriptor for a single logical API call.

use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;

use crate::{Error, Result};

/// Credential requirement of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// No credential beyond the public key headers.
    #[default]
    None,
    /// Identified by the public key headers only; never sends the bearer header.
    PublicKeyOnly,
    /// Sends `Authorization: Bearer <secret key>` when a secret key is configured.
    BearerSecret,
}

impl AuthMode {
    pub fn requires_secret(self) -> bool {
        matches!(self, AuthMode::BearerSecret)
    }
}

/// Method, path, payload and auth requirement of one call.
///
/// The payload is encoded once, when the request is built; every retry
/// attempt sends the same bytes.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Bytes>,
    auth: AuthMode,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            auth: AuthMode::None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST with a JSON payload.
    pub fn post<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> Result<Self> {
        Self::new(Method::POST, path).json(body)
    }

    /// Attaches a JSON payload, encoding it immediately.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let encoded = serde_json::to_vec(body).map_err(Error::Serialization)?;
        self.body = Some(Bytes::from(encoded));
        Ok(self)
    }

    pub fn auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth
    }
}
