use std::sync::Arc;

use crate::checkout::CheckoutService;
use crate::collection::CollectionService;
use crate::payment_link::PaymentLinkService;
use crate::payout::PayoutService;
use crate::refund::RefundService;
use crate::transport::HttpTransport;
use crate::wallet::WalletService;

use super::builder::IntaSendClientBuilder;
use super::endpoint::Environment;
use super::policy::RetryPolicy;

/// Immutable state shared by the client and every resource service.
#[derive(Debug)]
pub(crate) struct ClientCore {
    pub(crate) transport: HttpTransport,
    pub(crate) publishable_key: Option<String>,
    pub(crate) retry_policy: RetryPolicy,
    pub(crate) debug: bool,
}

impl ClientCore {
    /// Publishable key injected into request bodies that carry `public_key`.
    pub(crate) fn public_key(&self) -> Option<&str> {
        self.publishable_key.as_deref()
    }
}

/// IntaSend API client.
///
/// Cheap to clone; clones share one connection pool and one credential set.
/// Safe for concurrent use: all per-call state lives in the call itself.
#[derive(Debug, Clone)]
pub struct IntaSendClient {
    core: Arc<ClientCore>,
    collection: CollectionService,
    payout: PayoutService,
    wallet: WalletService,
    refund: RefundService,
    checkout: CheckoutService,
    payment_link: PaymentLinkService,
}

impl IntaSendClient {
    pub fn builder() -> IntaSendClientBuilder {
        IntaSendClientBuilder::new()
    }

    pub(crate) fn from_core(core: ClientCore) -> Self {
        let core = Arc::new(core);
        Self {
            collection: CollectionService::new(core.clone()),
            payout: PayoutService::new(core.clone()),
            wallet: WalletService::new(core.clone()),
            refund: RefundService::new(core.clone()),
            checkout: CheckoutService::new(core.clone()),
            payment_link: PaymentLinkService::new(core.clone()),
            core,
        }
    }

    /// Payment collection: checkout charges, M-Pesa prompts, payment status.
    pub fn collection(&self) -> &CollectionService {
        &self.collection
    }

    /// Send-money batches.
    pub fn payout(&self) -> &PayoutService {
        &self.payout
    }

    pub fn wallet(&self) -> &WalletService {
        &self.wallet
    }

    /// Refunds (chargebacks).
    pub fn refund(&self) -> &RefundService {
        &self.refund
    }

    pub fn checkout(&self) -> &CheckoutService {
        &self.checkout
    }

    pub fn payment_link(&self) -> &PaymentLinkService {
        &self.payment_link
    }

    pub fn publishable_key(&self) -> Option<&str> {
        self.core.publishable_key.as_deref()
    }

    pub fn base_url(&self) -> &str {
        self.core.transport.base_url()
    }

    /// Known environment of the base URL; `None` for a custom endpoint.
    pub fn environment(&self) -> Option<Environment> {
        Environment::from_base_url(self.base_url())
    }

    pub fn is_sandbox(&self) -> bool {
        self.environment() == Some(Environment::Sandbox)
    }

    pub fn is_production(&self) -> bool {
        self.environment() == Some(Environment::Production)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.core.retry_policy
    }

    pub fn debug(&self) -> bool {
        self.core.debug
    }
}
