//! Invoice and customer records returned by collection, checkout and wallet funding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentState {
    New,
    Pending,
    Processing,
    Complete,
    Failed,
    /// State not known to this client version
    #[default]
    #[serde(other)]
    Unknown,
}

impl PaymentState {
    /// `Complete` and `Failed` never change again.
    pub fn is_final(&self) -> bool {
        matches!(self, PaymentState::Complete | PaymentState::Failed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub invoice_id: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub state: PaymentState,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub provider: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub value: f64,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub account: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub api_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_reason: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerInfo {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub customer_id: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub email: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub first_name: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub last_name: String,
}

/// Invoice plus customer, returned by STK push, status checks and wallet funding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentResponse {
    pub invoice: Option<Invoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerInfo>,
}

/// Hosted checkout page created by a charge or checkout request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutSession {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub id: String,
    /// Page to redirect the customer to.
    #[serde(deserialize_with = "crate::types::null_default")]
    pub url: String,
    /// Needed, with `id`, to check the payment status later.
    #[serde(deserialize_with = "crate::types::null_default")]
    pub signature: String,
}

/// Customer details for checkout and wallet funding requests.
///
/// Serialized flat into the request body; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
}

impl Customer {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    pub fn with_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.phone_number = Some(phone.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_address(
        mut self,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        self.address = Some(address.into());
        self.city = Some(city.into());
        self.state = Some(state.into());
        self.zipcode = Some(zipcode.into());
        self
    }
}
