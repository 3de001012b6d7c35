//! Payouts (send money) to M-Pesa, banks over PesaLink, IntaSend wallets and
//! airtime top-ups.
//!
//! A payout batch is initiated, optionally approved, then tracked by its
//! tracking id. The provider wrappers (`mpesa`, `mpesa_b2b`, `bank`,
//! `intasend`, `airtime`) fix the provider and ask for manual approval
//! unless told otherwise.
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | [`PayoutService::initiate`] and wrappers | `POST /send-money/initiate/` |
//! | [`PayoutService::approve`] | `POST /send-money/approve/` |
//! | [`PayoutService::status`] | `POST /send-money/status/` |
//!
//! All payout operations authenticate with the secret key.

mod service;
mod types;

pub use service::PayoutService;
pub use types::{
    AccountType, AirtimeRequest, ApprovalStatus, ApproveRequest, ApproveResponse, B2bTransaction,
    BankRequest, BankTransaction, InitiateRequest, InitiateResponse, IntaSendTransferRequest,
    MpesaB2bRequest, MpesaRequest, PayoutRequest, PayoutStatusResponse, Provider, Transaction,
    TransactionResult, STATUS_COMPLETED, STATUS_FAILED, STATUS_PENDING, STATUS_PROCESSING,
};
