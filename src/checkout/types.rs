use serde::{Deserialize, Serialize};

use crate::types::{CheckoutSession, Customer, PaymentResponse, Tariff};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCheckoutRequest {
    pub amount: f64,
    pub currency: String,
    #[serde(flatten)]
    pub customer: Customer,
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<String>,
}

impl CreateCheckoutRequest {
    pub fn new(
        amount: f64,
        currency: impl Into<String>,
        customer: Customer,
        host: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            customer,
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn with_redirect_url(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    pub fn with_api_ref(mut self, api_ref: impl Into<String>) -> Self {
        self.api_ref = Some(api_ref.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_wallet_id(mut self, wallet_id: impl Into<String>) -> Self {
        self.wallet_id = Some(wallet_id.into());
        self
    }
}

pub type CreateCheckoutResponse = CheckoutSession;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutStatusRequest {
    pub signature: String,
    pub checkout_id: String,
    pub invoice_id: String,
}

impl CheckoutStatusRequest {
    pub fn new(
        signature: impl Into<String>,
        checkout_id: impl Into<String>,
        invoice_id: impl Into<String>,
    ) -> Self {
        Self {
            signature: signature.into(),
            checkout_id: checkout_id.into(),
            invoice_id: invoice_id.into(),
        }
    }
}

pub type CheckoutStatusResponse = PaymentResponse;
