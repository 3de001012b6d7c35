//! Payment collection: hosted checkout charges, M-Pesa STK push prompts and
//! payment status checks.
//!
//! `charge` and `status` only need the publishable key. The STK push is sent
//! with the secret key when one is configured.
//!
//! ## Example
//!
//! ```rust,no_run
//! use intasend::collection::StkPushRequest;
//! use intasend::{CancellationToken, IntaSendClient};
//!
//! # async fn run() -> intasend::Result<()> {
//! let client = IntaSendClient::builder()
//!     .publishable_key("ISPubKey_test_...")
//!     .secret_key("ISSecretKey_test_...")
//!     .build()?;
//!
//! let cancel = CancellationToken::new();
//! let push = StkPushRequest::new("254712345678", 100.0).with_api_ref("order-123");
//! let resp = client.collection().mpesa_stk_push(&cancel, &push).await?;
//! if let Some(invoice) = resp.invoice {
//!     let status = client
//!         .collection()
//!         .status(&cancel, &invoice.invoice_id, None)
//!         .await?;
//!     println!("{:?}", status.invoice.map(|i| i.state));
//! }
//! # Ok(())
//! # }
//! ```

mod service;
mod types;

pub use service::CollectionService;
pub use types::{
    ChargeRequest, ChargeResponse, StatusOptions, StatusResponse, StkPushRequest, StkPushResponse,
};
