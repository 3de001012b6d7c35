use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_APPROVED: &str = "APPROVED";
pub const STATUS_REJECTED: &str = "REJECTED";
pub const STATUS_COMPLETE: &str = "COMPLETE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RefundReason {
    /// Service was not delivered.
    #[serde(rename = "UNAVAILABLE")]
    ServiceUnavailable,
    #[serde(rename = "DUPLICATE")]
    DuplicatePayment,
    #[serde(rename = "FRAUDULENT")]
    Fraudulent,
    #[serde(rename = "CUSTOMER_REQUEST")]
    CustomerRequest,
    #[default]
    #[serde(rename = "OTHER")]
    Other,
    /// Reason not known to this client version; never sent.
    #[serde(other, skip_serializing)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chargeback {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub chargeback_id: String,
    /// Invoice id the refund applies to.
    #[serde(deserialize_with = "crate::types::null_default")]
    pub invoice: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub amount: f64,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub status: String,
    pub reason: Option<RefundReason>,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub reason_details: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Chargeback {
    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargebackListResponse {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub results: Vec<Chargeback>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateChargebackRequest {
    pub invoice: String,
    pub amount: f64,
    pub reason: RefundReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_details: Option<String>,
}

impl CreateChargebackRequest {
    pub fn new(invoice: impl Into<String>, amount: f64, reason: RefundReason) -> Self {
        Self {
            invoice: invoice.into(),
            amount,
            reason,
            reason_details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.reason_details = Some(details.into());
        self
    }
}
