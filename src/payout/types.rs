use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_PROCESSING: &str = "Processing";
pub const STATUS_COMPLETED: &str = "Completed";
pub const STATUS_FAILED: &str = "Failed";

/// Payout rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// M-Pesa to a consumer phone number.
    #[serde(rename = "MPESA-B2C")]
    MpesaB2c,
    /// M-Pesa to a PayBill or till number.
    #[serde(rename = "MPESA-B2B")]
    MpesaB2b,
    /// Bank transfer.
    #[serde(rename = "PESALINK")]
    PesaLink,
    /// Transfer to another IntaSend account.
    #[serde(rename = "INTASEND")]
    IntaSend,
    #[serde(rename = "AIRTIME")]
    Airtime,
}

/// Whether a batch waits for an explicit [`approve`](super::PayoutService::approve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApprovalStatus {
    #[default]
    Yes,
    No,
}

/// Kind of M-Pesa business account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    PayBill,
    TillNumber,
}

/// One recipient of a payout batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Phone number, bank account, till or IntaSend account.
    pub account: String,
    /// Decimal amount as a string (e.g. `"100"`).
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
}

impl Transaction {
    pub fn new(account: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            amount: amount.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = Some(narrative.into());
        self
    }
}

/// M-Pesa B2B recipient (PayBill or till).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct B2bTransaction {
    pub name: Option<String>,
    pub account: String,
    pub account_type: AccountType,
    /// Account number for PayBill payments.
    pub account_reference: Option<String>,
    pub amount: String,
    pub narrative: Option<String>,
}

impl B2bTransaction {
    pub fn paybill(
        paybill: impl Into<String>,
        account_reference: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            name: None,
            account: paybill.into(),
            account_type: AccountType::PayBill,
            account_reference: Some(account_reference.into()),
            amount: amount.into(),
            narrative: None,
        }
    }

    pub fn till(till: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: None,
            account: till.into(),
            account_type: AccountType::TillNumber,
            account_reference: None,
            amount: amount.into(),
            narrative: None,
        }
    }

    pub fn with_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = Some(narrative.into());
        self
    }
}

impl From<B2bTransaction> for Transaction {
    fn from(t: B2bTransaction) -> Self {
        Transaction {
            name: t.name,
            account: t.account,
            amount: t.amount,
            narrative: t.narrative,
            account_type: Some(t.account_type),
            account_reference: t.account_reference,
            bank_code: None,
        }
    }
}

/// PesaLink bank recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankTransaction {
    pub name: String,
    pub account: String,
    pub bank_code: String,
    pub amount: String,
    pub narrative: Option<String>,
}

impl BankTransaction {
    pub fn new(
        name: impl Into<String>,
        account: impl Into<String>,
        bank_code: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            account: account.into(),
            bank_code: bank_code.into(),
            amount: amount.into(),
            narrative: None,
        }
    }

    pub fn with_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = Some(narrative.into());
        self
    }
}

impl From<BankTransaction> for Transaction {
    fn from(t: BankTransaction) -> Self {
        Transaction {
            name: Some(t.name),
            account: t.account,
            amount: t.amount,
            narrative: t.narrative,
            account_type: None,
            account_reference: None,
            bank_code: Some(t.bank_code),
        }
    }
}

/// Wire body of `POST /send-money/initiate/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiateRequest {
    pub provider: Provider,
    pub currency: String,
    pub transactions: Vec<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_approval: Option<ApprovalStatus>,
}

impl InitiateRequest {
    pub fn new(provider: Provider, currency: impl Into<String>, transactions: Vec<Transaction>) -> Self {
        Self {
            provider,
            currency: currency.into(),
            transactions,
            callback_url: None,
            wallet_id: None,
            requires_approval: None,
        }
    }
}

/// Provider-agnostic batch used by the provider wrappers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutRequest<T = Transaction> {
    pub currency: String,
    pub transactions: Vec<T>,
    pub callback_url: Option<String>,
    /// Wallet to debit; the default settlement wallet when unset.
    pub wallet_id: Option<String>,
    /// Defaults to [`ApprovalStatus::Yes`].
    pub requires_approval: Option<ApprovalStatus>,
}

impl<T> PayoutRequest<T> {
    pub fn new(currency: impl Into<String>, transactions: Vec<T>) -> Self {
        Self {
            currency: currency.into(),
            transactions,
            callback_url: None,
            wallet_id: None,
            requires_approval: None,
        }
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn with_wallet_id(mut self, wallet_id: impl Into<String>) -> Self {
        self.wallet_id = Some(wallet_id.into());
        self
    }

    pub fn with_approval(mut self, approval: ApprovalStatus) -> Self {
        self.requires_approval = Some(approval);
        self
    }
}

impl<T: Clone + Into<Transaction>> PayoutRequest<T> {
    pub(crate) fn to_initiate(&self, provider: Provider) -> InitiateRequest {
        InitiateRequest {
            provider,
            currency: self.currency.clone(),
            transactions: self.transactions.iter().cloned().map(Into::into).collect(),
            callback_url: self.callback_url.clone(),
            wallet_id: self.wallet_id.clone(),
            requires_approval: Some(self.requires_approval.unwrap_or_default()),
        }
    }
}

pub type MpesaRequest = PayoutRequest<Transaction>;
pub type MpesaB2bRequest = PayoutRequest<B2bTransaction>;
pub type BankRequest = PayoutRequest<BankTransaction>;
pub type IntaSendTransferRequest = PayoutRequest<Transaction>;
pub type AirtimeRequest = PayoutRequest<Transaction>;

/// Per-recipient outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionResult {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub request_ref_id: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub account: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub amount: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub narrative: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_reason: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitiateResponse {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub tracking_id: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub status: String,
    /// Required, with `tracking_id`, to approve the batch.
    #[serde(deserialize_with = "crate::types::null_default")]
    pub nonce: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<String>,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub transactions: Vec<TransactionResult>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApproveRequest {
    pub tracking_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<String>,
}

impl ApproveRequest {
    pub fn new(tracking_id: impl Into<String>, nonce: impl Into<String>) -> Self {
        Self {
            tracking_id: tracking_id.into(),
            nonce: Some(nonce.into()),
            wallet_id: None,
        }
    }
}

impl From<&InitiateResponse> for ApproveRequest {
    fn from(resp: &InitiateResponse) -> Self {
        Self {
            tracking_id: resp.tracking_id.clone(),
            nonce: Some(resp.nonce.clone()).filter(|n| !n.is_empty()),
            wallet_id: resp.wallet_id.clone(),
        }
    }
}

/// Batch status, returned by approve and status checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoutStatusResponse {
    #[serde(deserialize_with = "crate::types::null_default")]
    pub tracking_id: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub status: String,
    #[serde(deserialize_with = "crate::types::null_default")]
    pub transactions: Vec<TransactionResult>,
}

impl PayoutStatusResponse {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }

    pub fn is_failed(&self) -> bool {
        self.status == STATUS_FAILED
    }
}

pub type ApproveResponse = PayoutStatusResponse;

#[derive(Debug, Serialize)]
pub(crate) struct StatusBody<'a> {
    pub tracking_id: &'a str,
}
