//! Base endpoints and environment detection from key prefixes.

use std::time::Duration;

/// Base URL of the sandbox (test) environment.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.intasend.com/api/v1";
/// Base URL of the production environment.
pub const PRODUCTION_BASE_URL: &str = "https://payment.intasend.com/api/v1";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_WAIT: Duration = Duration::from_secs(1);

/// Crate version, sent in the default user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PUBLISHABLE_KEY_TEST_PREFIX: &str = "ISPubKey_test";
pub const PUBLISHABLE_KEY_LIVE_PREFIX: &str = "ISPubKey_live";
pub const SECRET_KEY_TEST_PREFIX: &str = "ISSecretKey_test";
pub const SECRET_KEY_LIVE_PREFIX: &str = "ISSecretKey_live";

pub fn default_user_agent() -> String {
    format!("intasend-rust/{}", VERSION)
}

/// Remote environment a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Sandbox,
    Production,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }

    /// Maps a base URL back to a known environment.
    pub fn from_base_url(url: &str) -> Option<Self> {
        match url.trim_end_matches('/') {
            SANDBOX_BASE_URL => Some(Environment::Sandbox),
            PRODUCTION_BASE_URL => Some(Environment::Production),
            _ => None,
        }
    }

    /// Detects the environment from key prefixes.
    ///
    /// The publishable key is checked first; the secret key only decides when
    /// the publishable key is absent or carries no recognised prefix.
    pub fn detect(publishable_key: Option<&str>, secret_key: Option<&str>) -> Option<Self> {
        let from_public = publishable_key.and_then(|key| {
            if key.starts_with(PUBLISHABLE_KEY_TEST_PREFIX) {
                Some(Environment::Sandbox)
            } else if key.starts_with(PUBLISHABLE_KEY_LIVE_PREFIX) {
                Some(Environment::Production)
            } else {
                None
            }
        });

        from_public.or_else(|| {
            secret_key.and_then(|key| {
                if key.starts_with(SECRET_KEY_TEST_PREFIX) {
                    Some(Environment::Sandbox)
                } else if key.starts_with(SECRET_KEY_LIVE_PREFIX) {
                    Some(Environment::Production)
                } else {
                    None
                }
            })
        })
    }
}
