use std::time::Duration;

use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};

use super::core::{ClientCore, IntaSendClient};
use super::endpoint::{default_user_agent, Environment, DEFAULT_TIMEOUT};
use super::policy::RetryPolicy;

/// Builder for [`IntaSendClient`].
///
/// At least one of the publishable or secret key is required. Unless an
/// endpoint is set explicitly, the environment is detected from the key
/// prefixes (`ISPubKey_test…` / `ISSecretKey_test…` select the sandbox).
#[derive(Debug, Clone)]
pub struct IntaSendClientBuilder {
    publishable_key: Option<String>,
    secret_key: Option<String>,
    /// Explicit endpoint; set by `base_url`, `sandbox` or `production` (last call wins)
    endpoint: Option<String>,
    http_client: Option<reqwest::Client>,
    timeout: Duration,
    retry_policy: RetryPolicy,
    debug: bool,
    user_agent: Option<String>,
}

impl IntaSendClientBuilder {
    pub fn new() -> Self {
        Self {
            publishable_key: None,
            secret_key: None,
            endpoint: None,
            http_client: None,
            timeout: DEFAULT_TIMEOUT,
            retry_policy: RetryPolicy::default(),
            debug: false,
            user_agent: None,
        }
    }

    /// Seeds the builder from environment variables.
    ///
    /// - `INTASEND_PUBLISHABLE_KEY`, `INTASEND_SECRET_KEY`
    /// - `INTASEND_BASE_URL` (endpoint override)
    /// - `INTASEND_TIMEOUT_SECS` (default 30)
    /// - `INTASEND_MAX_RETRIES` (default 3)
    /// - `INTASEND_DEBUG` (`1` or `true`)
    ///
    /// Unset or unparsable variables leave the defaults in place; later builder
    /// calls override anything read here.
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        if let Ok(key) = std::env::var("INTASEND_PUBLISHABLE_KEY") {
            builder = builder.publishable_key(key);
        }
        if let Ok(key) = std::env::var("INTASEND_SECRET_KEY") {
            builder = builder.secret_key(key);
        }
        if let Ok(url) = std::env::var("INTASEND_BASE_URL") {
            if !url.trim().is_empty() {
                builder = builder.base_url(url);
            }
        }
        if let Some(secs) = std::env::var("INTASEND_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(retries) = std::env::var("INTASEND_MAX_RETRIES")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
        {
            builder.retry_policy.max_retries = retries;
        }
        if let Ok(flag) = std::env::var("INTASEND_DEBUG") {
            builder = builder.debug(matches!(flag.as_str(), "1" | "true" | "TRUE" | "True"));
        }
        builder
    }

    /// Publishable (public) key. An empty string counts as not set.
    pub fn publishable_key(mut self, key: impl Into<String>) -> Self {
        self.publishable_key = Some(key.into()).filter(|k| !k.is_empty());
        self
    }

    /// Secret key, sent as a bearer credential. An empty string counts as not set.
    pub fn secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = Some(key.into()).filter(|k| !k.is_empty());
        self
    }

    /// Overrides the detected endpoint (e.g. a mock server in tests).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Forces the sandbox endpoint.
    pub fn sandbox(mut self) -> Self {
        self.endpoint = Some(Environment::Sandbox.base_url().to_string());
        self
    }

    /// Forces the production endpoint.
    pub fn production(mut self) -> Self {
        self.endpoint = Some(Environment::Production.base_url().to_string());
        self
    }

    /// Uses a caller-configured reqwest client; `timeout` is then ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry budget and backoff base (default 3 retries, 1 s).
    pub fn retry(mut self, max_retries: u32, base_delay: Duration) -> Self {
        self.retry_policy = RetryPolicy::new(max_retries, base_delay);
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Logs method, URL, bodies and status of every attempt at `debug` level.
    pub fn debug(mut self, enable: bool) -> Self {
        self.debug = enable;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validates the configuration and builds the client.
    pub fn build(self) -> Result<IntaSendClient> {
        if self.publishable_key.is_none() && self.secret_key.is_none() {
            return Err(Error::configuration_with_context(
                "at least one API key must be provided",
                ErrorContext::new()
                    .with_field_path("publishable_key")
                    .with_source("client_builder"),
            ));
        }

        let base_url = match self.endpoint {
            Some(url) => url,
            None => Environment::detect(
                self.publishable_key.as_deref(),
                self.secret_key.as_deref(),
            )
            .map(|env| env.base_url().to_string())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "could not determine environment from keys",
                    ErrorContext::new()
                        .with_details("expected an ISPubKey_test/live or ISSecretKey_test/live prefix")
                        .with_source("client_builder"),
                )
            })?,
        };

        url::Url::parse(&base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(base_url.clone())
                    .with_source("client_builder"),
            )
        })?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => HttpTransport::default_client(self.timeout)?,
        };
        let user_agent = self.user_agent.unwrap_or_else(default_user_agent);

        let transport = HttpTransport::new(
            http_client,
            base_url,
            &user_agent,
            self.publishable_key.as_deref(),
            self.secret_key.as_deref(),
        )?;

        Ok(IntaSendClient::from_core(ClientCore {
            transport,
            publishable_key: self.publishable_key,
            retry_policy: self.retry_policy,
            debug: self.debug,
        }))
    }
}

impl Default for IntaSendClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
