use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Tariff;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentLink {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub link_id: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub currency: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub amount: f64,
    /// Shareable page URL.
    #[serde(deserialize_with = "crate::types::null_default")]
    pub url: String,
    #[serde(rename = "mobile_tarrif")]
    pub mobile_tariff: Option<Tariff>,
    #[serde(rename = "card_tarrif")]
    pub card_tariff: Option<Tariff>,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentLinkListResponse {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub results: Vec<PaymentLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentLinkRequest {
    pub title: String,
    pub currency: String,
    /// Fixed amount; the payer chooses the amount when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(
        rename = "mobile_tarrif",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_tariff: Option<Tariff>,
    #[serde(
        rename = "card_tarrif",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub card_tariff: Option<Tariff>,
    pub is_active: bool,
}

impl CreatePaymentLinkRequest {
    /// An active link without a fixed amount.
    pub fn new(title: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            currency: currency.into(),
            is_active: true,
            ..Self::default()
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_tariffs(mut self, card: Tariff, mobile: Tariff) -> Self {
        self.card_tariff = Some(card);
        self.mobile_tariff = Some(mobile);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
