use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::types::{CreatePaymentLinkRequest, PaymentLink, PaymentLinkListResponse};
use crate::client::core::ClientCore;
use crate::transport::{ApiRequest, AuthMode};
use crate::Result;

/// Payment link operations. Obtained from [`IntaSendClient::payment_link`](crate::IntaSendClient::payment_link).
#[derive(Debug, Clone)]
pub struct PaymentLinkService {
    core: Arc<ClientCore>,
}

impl PaymentLinkService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    pub async fn list(&self, cancel: &CancellationToken) -> Result<PaymentLinkListResponse> {
        let request = ApiRequest::get("/paymentlinks/").auth(AuthMode::BearerSecret);
        self.core.execute_json(cancel, request).await
    }

    pub async fn create(
        &self,
        cancel: &CancellationToken,
        request: &CreatePaymentLinkRequest,
    ) -> Result<PaymentLink> {
        let request = ApiRequest::post("/paymentlinks/", request)?.auth(AuthMode::BearerSecret);
        self.core.execute_json(cancel, request).await
    }

    pub async fn get(&self, cancel: &CancellationToken, link_id: &str) -> Result<PaymentLink> {
        let request =
            ApiRequest::get(format!("/paymentlinks/{}/", link_id)).auth(AuthMode::BearerSecret);
        self.core.execute_json(cancel, request).await
    }
}
