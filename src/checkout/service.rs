use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::types::{
    CheckoutStatusRequest, CheckoutStatusResponse, CreateCheckoutRequest, CreateCheckoutResponse,
};
use crate::client::core::ClientCore;
use crate::transport::{ApiRequest, AuthMode};
use crate::types::WithPublicKey;
use crate::Result;

/// Checkout operations. Obtained from [`IntaSendClient::checkout`](crate::IntaSendClient::checkout).
#[derive(Debug, Clone)]
pub struct CheckoutService {
    core: Arc<ClientCore>,
}

impl CheckoutService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    pub async fn create(
        &self,
        cancel: &CancellationToken,
        request: &CreateCheckoutRequest,
    ) -> Result<CreateCheckoutResponse> {
        let body = WithPublicKey::new(self.core.public_key(), request);
        let request = ApiRequest::post("/checkout/", &body)?.auth(AuthMode::PublicKeyOnly);
        self.core.execute_json(cancel, request).await
    }

    /// Payment status of a checkout session.
    pub async fn status(
        &self,
        cancel: &CancellationToken,
        request: &CheckoutStatusRequest,
    ) -> Result<CheckoutStatusResponse> {
        let request = ApiRequest::post("/payment/status/", request)?.auth(AuthMode::PublicKeyOnly);
        self.core.execute_json(cancel, request).await
    }
}
