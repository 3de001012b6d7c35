use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CheckoutSession, Customer, PaymentResponse, Tariff};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WalletType {
    #[default]
    Working,
    Settlement,
    /// Type not known to this client version; never sent.
    #[serde(other, skip_serializing)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wallet {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub wallet_id: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub label: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub currency: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub wallet_type: WalletType,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub current_balance: f64,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub available_balance: f64,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub can_disburse: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletListResponse {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub results: Vec<Wallet>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWalletRequest {
    pub currency: String,
    pub label: String,
    /// `WORKING` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_type: Option<WalletType>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub can_disburse: bool,
}

impl CreateWalletRequest {
    pub fn new(currency: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_wallet_type(mut self, wallet_type: WalletType) -> Self {
        self.wallet_type = Some(wallet_type);
        self
    }

    pub fn with_can_disburse(mut self, can_disburse: bool) -> Self {
        self.can_disburse = can_disburse;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletTransaction {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub transaction_id: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub wallet_id: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub trans_type: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub amount: f64,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub narrative: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub running_balance: f64,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletTransactionsResponse {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub results: Vec<WalletTransaction>,
}

/// Moves funds from `source_id` to `destination_id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntraTransferRequest {
    pub source_id: String,
    pub destination_id: String,
    pub amount: f64,
    pub narrative: String,
}

impl IntraTransferRequest {
    pub fn new(
        source_id: impl Into<String>,
        destination_id: impl Into<String>,
        amount: f64,
        narrative: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            destination_id: destination_id.into(),
            amount,
            narrative: narrative.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct IntraTransferBody<'a> {
    /// Destination wallet.
    pub wallet_id: &'a str,
    pub amount: f64,
    pub narrative: &'a str,
}

impl<'a> From<&'a IntraTransferRequest> for IntraTransferBody<'a> {
    fn from(req: &'a IntraTransferRequest) -> Self {
        Self {
            wallet_id: &req.destination_id,
            amount: req.amount,
            narrative: &req.narrative,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntraTransferResponse {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub status: String,
    #[serde(rename = "origin_wallet_id")]
    #[serde(deserialize_with = "crate::types::null_default")]
    pub origin_id: String,
    #[serde(rename = "target_wallet_id")]
    #[serde(deserialize_with = "crate::types::null_default")]
    pub target_id: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub amount: f64,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub narrative: String,
}

/// Funds a wallet through an M-Pesa STK push in `KES`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundMpesaRequest {
    pub wallet_id: String,
    pub phone_number: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_ref: Option<String>,
}

impl FundMpesaRequest {
    pub fn new(wallet_id: impl Into<String>, phone_number: impl Into<String>, amount: f64) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            phone_number: phone_number.into(),
            amount,
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_api_ref(mut self, api_ref: impl Into<String>) -> Self {
        self.api_ref = Some(api_ref.into());
        self
    }
}

pub type FundMpesaResponse = PaymentResponse;

/// Funds a wallet through a hosted checkout page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundCheckoutRequest {
    pub wallet_id: String,
    pub amount: f64,
    pub currency: String,
    #[serde(flatten)]
    pub customer: Customer,
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_ref: Option<String>,
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

impl FundCheckoutRequest {
    pub fn new(
        wallet_id: impl Into<String>,
        amount: f64,
        currency: impl Into<String>,
        customer: Customer,
        host: impl Into<String>,
    ) -> Self {
        Self {
            wallet_id: wallet_id.into(),
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

    pub fn with_tariffs(mut self, card: Tariff, mobile: Tariff) -> Self {
        self.card_tariff = Some(card);
        self.mobile_tariff = Some(mobile);
        self
    }
}

pub type FundCheckoutResponse = CheckoutSession;
