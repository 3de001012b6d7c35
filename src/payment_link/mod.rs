//! Reusable payment links.

mod service;
mod types;

pub use service::PaymentLinkService;
pub use types::{CreatePaymentLinkRequest, PaymentLink, PaymentLinkListResponse};
