use serde::{Deserialize, Serialize};

use crate::types::{CheckoutSession, Customer, PaymentResponse, Tariff};

/// Request for a hosted checkout page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeRequest {
    #[serde(flatten)]
    pub customer: Customer,
    /// Base URL of the merchant site, used for CORS.
    pub host: String,
    pub amount: f64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Restricts the page to one payment method (e.g. `CARD-PAYMENT`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<String>,
    #[serde(
        rename = "card_tarrif",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub card_tariff: Option<Tariff>,
    #[serde(
        rename = "mobile_tarrif",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_tariff: Option<Tariff>,
}

impl ChargeRequest {
    pub fn new(
        customer: Customer,
        host: impl Into<String>,
        amount: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            customer,
            host: host.into(),
            amount,
            currency: currency.into(),
            ..Self::default()
        }
    }

    pub fn with_api_ref(mut self, api_ref: impl Into<String>) -> Self {
        self.api_ref = Some(api_ref.into());
        self
    }

    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_wallet_id(mut self, wallet_id: impl Into<String>) -> Self {
        self.wallet_id = Some(wallet_id.into());
        self
    }

    pub fn with_tariffs(mut self, card: Tariff, mobile: Tariff) -> Self {
        self.card_tariff = Some(card);
        self.mobile_tariff = Some(mobile);
        self
    }
}

pub type ChargeResponse = CheckoutSession;

/// M-Pesa STK push. Always sent as `M-PESA` in `KES`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StkPushRequest {
    /// Format `254XXXXXXXXX`.
    pub phone_number: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<String>,
}

impl StkPushRequest {
    pub fn new(phone_number: impl Into<String>, amount: f64) -> Self {
        Self {
            phone_number: phone_number.into(),
            amount,
            ..Self::default()
        }
    }

    pub fn with_api_ref(mut self, api_ref: impl Into<String>) -> Self {
        self.api_ref = Some(api_ref.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_wallet_id(mut self, wallet_id: impl Into<String>) -> Self {
        self.wallet_id = Some(wallet_id.into());
        self
    }
}

pub type StkPushResponse = PaymentResponse;

/// Extra identifiers for a status check on a checkout-originated invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusOptions {
    pub checkout_id: Option<String>,
    pub signature: Option<String>,
}

impl StatusOptions {
    pub fn checkout(checkout_id: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            checkout_id: Some(checkout_id.into()),
            signature: Some(signature.into()),
        }
    }
}

pub type StatusResponse = PaymentResponse;

#[derive(Debug, Serialize)]
pub(crate) struct StatusBody<'a> {
    pub invoice_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<&'a str>,
}
