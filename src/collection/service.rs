use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use super::types::{
    ChargeRequest, ChargeResponse, StatusBody, StatusOptions, StatusResponse,
    StkPushRequest, StkPushResponse,
};
use crate::client::core::ClientCore;
use crate::transport::{ApiRequest, AuthMode};
use crate::types::{MpesaBody, WithPublicKey};
use crate::Result;

/// Collection operations. Obtained from [`IntaSendClient::collection`](crate::IntaSendClient::collection).
#[derive(Debug, Clone)]
pub struct CollectionService {
    core: Arc<ClientCore>,
}

impl CollectionService {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Creates a hosted checkout page; redirect the customer to the returned `url`.
    pub async fn charge(
        &self,
        cancel: &CancellationToken,
        request: &ChargeRequest,
    ) -> Result<ChargeResponse> {
        let request = charge_request(self.core.public_key(), request)?;
        self.core.execute_json(cancel, request).await
    }

    /// Sends an M-Pesa payment prompt to the customer's phone.
    pub async fn mpesa_stk_push(
        &self,
        cancel: &CancellationToken,
        request: &StkPushRequest,
    ) -> Result<StkPushResponse> {
        let request = stk_push_request(self.core.public_key(), request)?;
        self.core.execute_json(cancel, request).await
    }

    /// Current state of an invoice.
    pub async fn status(
        &self,
        cancel: &CancellationToken,
        invoice_id: &str,
        options: Option<&StatusOptions>,
    ) -> Result<StatusResponse> {
        let request = status_request(self.core.public_key(), invoice_id, options)?;
        self.core.execute_json(cancel, request).await
    }
}

fn charge_request(public_key: Option<&str>, request: &ChargeRequest) -> Result<ApiRequest> {
    Ok(ApiRequest::post("/checkout/", &WithPublicKey::new(public_key, request))?
        .auth(AuthMode::PublicKeyOnly))
}

fn stk_push_request(
    public_key: Option<&str>,
    request: &StkPushRequest,
) -> Result<ApiRequest> {
    let body = MpesaBody::new(request);
    Ok(
        ApiRequest::post("/payment/mpesa-stk-push/", &WithPublicKey::new(public_key, &body))?
            .auth(AuthMode::BearerSecret),
    )
}

fn status_request(
    public_key: Option<&str>,
    invoice_id: &str,
    options: Option<&StatusOptions>,
) -> Result<ApiRequest> {
    let body = StatusBody {
        invoice_id,
        public_key,
        checkout_id: options.and_then(|o| o.checkout_id.as_deref()),
        signature: options.and_then(|o| o.signature.as_deref()),
    };
    Ok(ApiRequest::post("/payment/status/", &body)?.auth(AuthMode::PublicKeyOnly))
}
