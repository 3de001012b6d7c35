use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::types::{
    AirtimeRequest, ApproveRequest, ApproveResponse, BankRequest, InitiateRequest,
    InitiateResponse, IntaSendTransferRequest, MpesaB2bRequest, MpesaRequest, PayoutStatusResponse,
    Provider, StatusBody,
};
use crate::client::core::ClientCore;
use crate::transport::{ApiRequest, AuthMode};
use crate::Result;

/// Payout operations. Obtained from [`IntaSendClient::payout`](crate::IntaSendClient::payout).
#[derive(Debug, Clone)]
pub struct PayoutService {
    core: Arc<ClientCore>,
}

impl PayoutService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Starts a payout batch exactly as described by `request`.
    pub async fn initiate(
        &self,
        cancel: &CancellationToken,
        request: &InitiateRequest,
    ) -> Result<InitiateResponse> {
        let request = ApiRequest::post("/send-money/initiate/", request)?.auth(AuthMode::BearerSecret);
        self.core.execute_json(cancel, request).await
    }

    /// M-Pesa B2C payout to phone numbers.
    pub async fn mpesa(
        &self,
        cancel: &CancellationToken,
        request: &MpesaRequest,
    ) -> Result<InitiateResponse> {
        self.initiate(cancel, &request.to_initiate(Provider::MpesaB2c))
            .await
    }

    /// M-Pesa B2B payout to PayBill or till numbers.
    pub async fn mpesa_b2b(
        &self,
        cancel: &CancellationToken,
        request: &MpesaB2bRequest,
    ) -> Result<InitiateResponse> {
        self.initiate(cancel, &request.to_initiate(Provider::MpesaB2b))
            .await
    }

    /// Bank transfer over PesaLink.
    pub async fn bank(
        &self,
        cancel: &CancellationToken,
        request: &BankRequest,
    ) -> Result<InitiateResponse> {
        self.initiate(cancel, &request.to_initiate(Provider::PesaLink))
            .await
    }

    pub async fn intasend(
        &self,
        cancel: &CancellationToken,
        request: &IntaSendTransferRequest,
    ) -> Result<InitiateResponse> {
        self.initiate(cancel, &request.to_initiate(Provider::IntaSend))
            .await
    }

    pub async fn airtime(
        &self,
        cancel: &CancellationToken,
        request: &AirtimeRequest,
    ) -> Result<InitiateResponse> {
        self.initiate(cancel, &request.to_initiate(Provider::Airtime))
            .await
    }

    /// Approves a batch initiated with manual approval.
    pub async fn approve(
        &self,
        cancel: &CancellationToken,
        request: &ApproveRequest,
    ) -> Result<ApproveResponse> {
        let request = ApiRequest::post("/send-money/approve/", request)?.auth(AuthMode::BearerSecret);
        self.core.execute_json(cancel, request).await
    }

    pub async fn status(
        &self,
        cancel: &CancellationToken,
        tracking_id: &str,
    ) -> Result<PayoutStatusResponse> {
        let request = ApiRequest::post("/send-money/status/", &StatusBody { tracking_id })?
            .auth(AuthMode::BearerSecret);
        self.core.execute_json(cancel, request).await
    }
}
