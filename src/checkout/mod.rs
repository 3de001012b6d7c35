//! Hosted checkout sessions.
//!
//! [`CheckoutService::create`] returns a page URL together with the `id` and
//! `signature` needed by [`CheckoutService::status`]. Both calls only need the
//! publishable key.

mod service;
mod types;

pub use service::CheckoutService;
pub use types::{
    CheckoutStatusRequest, CheckoutStatusResponse, CreateCheckoutRequest, CreateCheckoutResponse,
};
