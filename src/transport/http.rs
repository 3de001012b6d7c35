use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};

use super::request::ApiRequest;
use crate::error::NetworkError;
use crate::{Error, ErrorContext, Result};

/// Primary public key header.
pub const HEADER_PUBLIC_API_KEY: &str = "x-intasend-public-api-key";
/// Legacy alias of the public key header; carries the same value.
pub const HEADER_PUBLIC_API_KEY_LEGACY: &str = "intasend_public_api_key";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Sends [`ApiRequest`]s against one base URL with a fixed credential set.
///
/// Header values are validated and built once; the underlying
/// `reqwest::Client` pools connections and is shared by concurrent calls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
    bearer: Option<HeaderValue>,
}

impl HttpTransport {
    /// Creates a pooled client with production-friendly defaults.
    pub fn default_client(timeout: Duration) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(32)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()
            .map_err(|e| {
                Error::configuration_with_context(
                    format!("Failed to create HTTP client: {}", e),
                    ErrorContext::new().with_source("http_transport"),
                )
            })
    }

    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        user_agent: &str,
        publishable_key: Option<&str>,
        secret_key: Option<&str>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("user_agent", user_agent)?);

        if let Some(key) = publishable_key {
            let value = header_value("publishable_key", key)?;
            headers.insert(HeaderName::from_static(HEADER_PUBLIC_API_KEY), value.clone());
            headers.insert(HeaderName::from_static(HEADER_PUBLIC_API_KEY_LEGACY), value);
        }

        let bearer = secret_key
            .map(|key| {
                let mut value = header_value("secret_key", &format!("Bearer {}", key))?;
                value.set_sensitive(true);
                Ok::<_, Error>(value)
            })
            .transpose()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers,
            bearer,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Builds the reqwest request for one attempt.
    pub fn build(&self, request: &ApiRequest) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(request.method().clone(), self.url(request.path()))
            .headers(self.headers.clone());

        if let Some(body) = request.body() {
            builder = builder
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(body.clone());
        }

        if request.auth_mode().requires_secret() {
            if let Some(bearer) = &self.bearer {
                builder = builder.header(AUTHORIZATION, bearer.clone());
            }
        }

        builder
    }

    /// Performs one round-trip and reads the full body.
    ///
    /// Send and body-read failures both surface as [`NetworkError`].
    pub async fn send(&self, request: &ApiRequest) -> std::result::Result<(u16, Bytes), NetworkError> {
        let response = self
            .build(request)
            .send()
            .await
            .map_err(|e| NetworkError::new("request failed", e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| NetworkError::new("failed to read response", e))?;

        Ok((status, body))
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| {
        Error::configuration_with_context(
            "value cannot be sent as an HTTP header",
            ErrorContext::new()
                .with_field_path(field)
                .with_source("http_transport"),
        )
    })
}
