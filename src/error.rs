use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Structured context attached to configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Builder option that caused the error (e.g., "base_url", "publishable_key")
    pub field_path: Option<String>,
    /// Additional detail about the rejected value
    pub details: Option<String>,
    /// Component that raised the error (e.g., "client_builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Error payload returned by the IntaSend API for a non-2xx response.
///
/// When the response body does not match this shape, the raw body text is kept
/// verbatim in [`ApiError::message`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// HTTP status code of the response.
    #[serde(skip)]
    pub status: u16,
    /// IntaSend error code, if provided.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable error message.
    #[serde(default)]
    pub message: Option<String>,
    /// Additional error detail.
    #[serde(default)]
    pub detail: Option<String>,
    /// Field-level validation errors.
    #[serde(default, deserialize_with = "crate::types::null_default")]
    pub errors: HashMap<String, Vec<String>>,
    /// Request identifier for support correlation.
    #[serde(default)]
    pub request_id: Option<String>,
}

impl ApiError {
    /// Builds an error from a response status and body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let mut err = serde_json::from_slice::<ApiError>(body).unwrap_or_else(|_| ApiError {
            message: Some(String::from_utf8_lossy(body).into_owned()),
            ..ApiError::default()
        });
        err.status = status;
        err
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn is_authentication_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// A 400 carrying at least one field error.
    pub fn is_validation_error(&self) -> bool {
        self.status == 400 && !self.errors.is_empty()
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    /// Whether the transport would have retried this status.
    pub fn is_retryable(&self) -> bool {
        crate::client::classify_status(self.status).is_retryable()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or_else(|| self.detail.as_deref().filter(|d| !d.is_empty()));
        match text {
            Some(text) => write!(f, "API error (HTTP {}): {}", self.status, text),
            None => write!(f, "API error (HTTP {})", self.status),
        }
    }
}

impl std::error::Error for ApiError {}

/// Transport-level failure (connection, DNS, timeout, body read).
#[derive(Debug, Error)]
#[error("network error: {message}: {source}")]
pub struct NetworkError {
    pub message: String,
    #[source]
    pub source: reqwest::Error,
}

impl NetworkError {
    pub fn new(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.source.is_timeout()
    }

    pub fn is_connect(&self) -> bool {
        self.source.is_connect()
    }
}

/// Unified error type for the IntaSend client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    /// A 2xx response whose body does not match the expected shape.
    #[error("Failed to decode response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Request cancelled")]
    Cancelled,
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }

    pub fn as_network_error(&self) -> Option<&NetworkError> {
        match self {
            Error::Network(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api(_))
    }

    pub fn is_network_error(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }

    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    pub fn is_not_found(&self) -> bool {
        self.as_api_error().is_some_and(ApiError::is_not_found)
    }

    pub fn is_authentication_error(&self) -> bool {
        self.as_api_error()
            .is_some_and(ApiError::is_authentication_error)
    }

    pub fn is_validation_error(&self) -> bool {
        self.as_api_error().is_some_and(ApiError::is_validation_error)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.as_api_error().is_some_and(ApiError::is_rate_limited)
    }

    /// Field-level validation messages, when the API returned any.
    pub fn validation_errors(&self) -> Option<&HashMap<String, Vec<String>>> {
        self.as_api_error()
            .map(|err| &err.errors)
            .filter(|errors| !errors.is_empty())
    }

    /// Whether repeating the same call later could succeed.
    ///
    /// Network failures, 429 and 5xx are retryable; contract, configuration and
    /// cancellation errors are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Api(err) => err.is_retryable(),
            Error::Network(_) => true,
            _ => false,
        }
    }

    /// HTTP status associated with the error, if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api(err) => Some(err.status),
            Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}
