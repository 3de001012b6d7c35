//! Wallets: listing, creation, transactions, transfers between wallets and
//! funding through M-Pesa or a hosted checkout.
//!
//! Funding calls only need the publishable key; everything else is sent with
//! the secret key. A wallet created without a type becomes a `WORKING` wallet.

mod service;
mod types;

pub use service::WalletService;
pub use types::{
    CreateWalletRequest, FundCheckoutRequest, FundCheckoutResponse, FundMpesaRequest,
    FundMpesaResponse, IntraTransferRequest, IntraTransferResponse, Wallet, WalletListResponse,
    WalletTransaction, WalletTransactionsResponse, WalletType,
};
