use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::types::{Chargeback, ChargebackListResponse, CreateChargebackRequest};
use crate::client::core::ClientCore;
use crate::transport::{ApiRequest, AuthMode};
use crate::Result;

/// Refund operations. Obtained from [`IntaSendClient::refund`](crate::IntaSendClient::refund).
#[derive(Debug, Clone)]
pub struct RefundService {
    core: Arc<ClientCore>,
}

impl RefundService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    pub async fn list(&self, cancel: &CancellationToken) -> Result<ChargebackListResponse> {
        let request = ApiRequest::get("/chargebacks/").auth(AuthMode::BearerSecret);
        self.core.execute_json(cancel, request).await
    }

    /// Requests a full or partial refund of an invoice.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        request: &CreateChargebackRequest,
    ) -> Result<Chargeback> {
        let request = ApiRequest::post("/chargebacks/", request)?.auth(AuthMode::BearerSecret);
        self.core.execute_json(cancel, request).await
    }

    pub async fn get(&self, cancel: &CancellationToken, chargeback_id: &str) -> Result<Chargeback> {
        let request = ApiRequest::get(format!("/chargebacks/{}/", chargeback_id))
            .auth(AuthMode::BearerSecret);
        self.core.execute_json(cancel, request).await
    }
}
