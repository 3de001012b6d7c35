//! IntaSend client: construction, configuration and request execution.
//!
//! Resource operations live in their own modules and reach the API through
//! the shared execution loop in `client/execution.rs`.

pub mod builder;
pub mod core;
pub mod endpoint;
mod error_classification;
mod execution;
pub mod policy;

pub use builder::IntaSendClientBuilder;
pub use self::core::IntaSendClient;
pub use endpoint::{
    Environment, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_WAIT, DEFAULT_TIMEOUT, PRODUCTION_BASE_URL,
    SANDBOX_BASE_URL, VERSION,
};
pub use error_classification::{classify_status, Disposition};
pub use policy::RetryPolicy;
