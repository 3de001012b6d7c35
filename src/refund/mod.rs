//! Refunds, exposed by the API as chargebacks.

mod service;
mod types;

pub use service::RefundService;
pub use types::{
    Chargeback, ChargebackListResponse, CreateChargebackRequest, RefundReason, STATUS_APPROVED,
    STATUS_COMPLETE, STATUS_PENDING, STATUS_REJECTED,
};
