//! Wire types shared by several resource modules.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`payment`] | Invoices, customers, payment states and checkout sessions |
//! | [`tariff`] | Who pays transaction fees |
//!
//! ## Example
//!
//! ```rust
//! use intasend::types::{Invoice, PaymentState};
//!
//! let invoice: Invoice = serde_json::from_str(
//!     r#"{"invoice_id":"INV-1","state":"COMPLETE","value":100.0}"#,
//! ).unwrap();
//! assert_eq!(invoice.state, PaymentState::Complete);
//! assert!(invoice.state.is_final());
//! ```

pub mod payment;
pub mod tariff;

pub use payment::{CheckoutSession, Customer, CustomerInfo, Invoice, PaymentResponse, PaymentState};
pub use tariff::Tariff;

use serde::{Deserialize, Deserializer, Serialize};

/// Decodes a JSON `null` as `T::default()`.
///
/// Container-level `#[serde(default)]` only covers missing keys; response
/// fields use this so an explicit `null` decodes the same way.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body with the client's publishable key injected as `public_key`.
#[derive(Debug, Serialize)]
pub(crate) struct WithPublicKey<'a, T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<&'a str>,
    #[serde(flatten)]
    pub inner: &'a T,
}

impl<'a, T> WithPublicKey<'a, T> {
    pub fn new(public_key: Option<&'a str>, inner: &'a T) -> Self {
        Self { public_key, inner }
    }
}

/// Mobile-money body: caller fields plus the fixed `M-PESA` method and `KES` currency.
#[derive(Debug, Serialize)]
pub(crate) struct MpesaBody<'a, T> {
    #[serde(flatten)]
    pub request: &'a T,
    pub method: &'static str,
    pub currency: &'static str,
}

impl<'a, T> MpesaBody<'a, T> {
    pub fn new(request: &'a T) -> Self {
        Self {
            request,
            method: "M-PESA",
            currency: "KES",
        }
    }
}
