use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::types::{
    CreateWalletRequest, FundCheckoutRequest, FundCheckoutResponse, FundMpesaRequest,
    FundMpesaResponse, IntraTransferBody, IntraTransferRequest, IntraTransferResponse, Wallet,
    WalletListResponse, WalletTransactionsResponse,
};
use crate::client::core::ClientCore;
use crate::transport::{ApiRequest, AuthMode};
use crate::types::{MpesaBody, WithPublicKey};
use crate::Result;

/// Wallet operations. Obtained from [`IntaSendClient::wallet`](crate::IntaSendClient::wallet).
#[derive(Debug, Clone)]
pub struct WalletService {
    core: Arc<ClientCore>,
}

impl WalletService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    pub async fn list(&self, cancel: &CancellationToken) -> Result<WalletListResponse> {
        let request = ApiRequest::get("/wallets/").auth(AuthMode::BearerSecret);
        self.core.execute_json(cancel, request).await
    }

    /// Creates a wallet; the type defaults to `WORKING`.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        request: &CreateWalletRequest,
    ) -> Result<Wallet> {
        let request = create_request(request)?;
        self.core.execute_json(cancel, request).await
    }

    pub async fn get(&self, cancel: &CancellationToken, wallet_id: &str) -> Result<Wallet> {
        let request =
            ApiRequest::get(format!("/wallets/{}/", wallet_id)).auth(AuthMode::BearerSecret);
        self.core.execute_json(cancel, request).await
    }

    pub async fn transactions(
        &self,
        cancel: &CancellationToken,
        wallet_id: &str,
    ) -> Result<WalletTransactionsResponse> {
        let request = ApiRequest::get(format!("/wallets/{}/transactions/", wallet_id))
            .auth(AuthMode::BearerSecret);
        self.core.execute_json(cancel, request).await
    }

    /// Moves funds between two wallets of the same account.
    pub async fn intra_transfer(
        &self,
        cancel: &CancellationToken,
        request: &IntraTransferRequest,
    ) -> Result<IntraTransferResponse> {
        let request = intra_transfer_request(request)?;
        self.core.execute_json(cancel, request).await
    }

    /// Tops up a wallet with an M-Pesa STK push.
    pub async fn fund_mpesa(
        &self,
        cancel: &CancellationToken,
        request: &FundMpesaRequest,
    ) -> Result<FundMpesaResponse> {
        let request = fund_mpesa_request(self.core.public_key(), request)?;
        self.core.execute_json(cancel, request).await
    }

    /// Tops up a wallet through a hosted checkout page.
    pub async fn fund_checkout(
        &self,
        cancel: &CancellationToken,
        request: &FundCheckoutRequest,
    ) -> Result<FundCheckoutResponse> {
        let body = WithPublicKey::new(self.core.public_key(), request);
        let request = ApiRequest::post("/checkout/", &body)?.auth(AuthMode::PublicKeyOnly);
        self.core.execute_json(cancel, request).await
    }
}

fn create_request(request: &CreateWalletRequest) -> Result<ApiRequest> {
    let body = CreateWalletRequest {
        wallet_type: Some(request.wallet_type.unwrap_or_default()),
        ..request.clone()
    };
    Ok(ApiRequest::post("/wallets/", &body)?.auth(AuthMode::BearerSecret))
}

fn intra_transfer_request(request: &IntraTransferRequest) -> Result<ApiRequest> {
    let path = format!("/wallets/{}/intra_transfer/", request.source_id);
    Ok(ApiRequest::post(path, &IntraTransferBody::from(request))?.auth(AuthMode::BearerSecret))
}

fn fund_mpesa_request(public_key: Option<&str>, request: &FundMpesaRequest) -> Result<ApiRequest> {
    let body = MpesaBody::new(request);
    Ok(
        ApiRequest::post("/payment/mpesa-stk-push/", &WithPublicKey::new(public_key, &body))?
            .auth(AuthMode::PublicKeyOnly),
    )
}
