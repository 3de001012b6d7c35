//! # intasend
//!
//! Typed async client for the IntaSend payment gateway REST API.
//!
//! ## Overview
//!
//! Every operation goes through one execution path that encodes the payload
//! once, attaches the credential headers the endpoint needs, retries transient
//! failures with exponential backoff and maps error responses into
//! [`ApiError`]. Calls take a [`CancellationToken`]; cancelling it aborts the
//! call whether it is waiting on the network or sleeping between attempts.
//!
//! - **Retries**: 429, 5xx and network failures are retried up to
//!   `max_retries` times, waiting `base × 2^(attempt−1)` between attempts
//! - **Terminal errors**: other 4xx responses fail immediately
//! - **Environment**: sandbox or production is picked from the key prefixes
//!   unless an endpoint is set explicitly
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use intasend::collection::StkPushRequest;
//! use intasend::{CancellationToken, IntaSendClient};
//!
//! #[tokio::main]
//! async fn main() -> intasend::Result<()> {
//!     let client = IntaSendClient::builder()
//!         .publishable_key("ISPubKey_test_...")
//!         .secret_key("ISSecretKey_test_...")
//!         .build()?;
//!
//!     let cancel = CancellationToken::new();
//!     let wallets = client.wallet().list(&cancel).await?;
//!     for wallet in wallets.results {
//!         println!("{} {} {}", wallet.wallet_id, wallet.currency, wallet.available_balance);
//!     }
//!
//!     let push = StkPushRequest::new("254712345678", 10.0).with_api_ref("order-1");
//!     let resp = client.collection().mpesa_stk_push(&cancel, &push).await?;
//!     println!("{:?}", resp.invoice);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, retry policy and status classification |
//! | [`transport`] | Request descriptor and reqwest-backed transport |
//! | [`error`] | Error taxonomy |
//! | [`types`] | Invoice, customer and tariff types shared across resources |
//! | [`collection`] | Checkout charges, M-Pesa STK push, payment status |
//! | [`payout`] | Send-money batches and approvals |
//! | [`wallet`] | Wallets, transfers and wallet funding |
//! | [`refund`] | Chargebacks |
//! | [`checkout`] | Hosted checkout sessions |
//! | [`payment_link`] | Payment links |

pub mod checkout;
pub mod client;
pub mod collection;
pub mod payment_link;
pub mod payout;
pub mod refund;
pub mod transport;
pub mod types;
pub mod wallet;

pub use client::{
    Environment, IntaSendClient, IntaSendClientBuilder, RetryPolicy, PRODUCTION_BASE_URL,
    SANDBOX_BASE_URL,
};
pub use tokio_util::sync::CancellationToken;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{ApiError, Error, ErrorContext, NetworkError};
