use intasend::checkout::{CheckoutStatusRequest, CreateCheckoutRequest};
use intasend::types::{Customer, PaymentState};
use intasend::CancellationToken;
use mockito::Matcher;
use serde_json::json;

use crate::mock_server::{MockServerFixture, PUBLIC_KEY};

#[tokio::test]
async fn test_create_checkout_flattens_customer() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/checkout/")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({
            "public_key": PUBLIC_KEY,
            "amount": 1000.0,
            "currency": "KES",
            "email": "otieno@example.com",
            "first_name": "Otieno",
            "last_name": "Ouma",
            "country": "KE",
            "host": "https://shop.example.com",
            "api_ref": "cart-9"
        })))
        .with_status(200)
        .with_body(r#"{"id":"CHK-9","url":"https://sandbox.intasend.com/checkout/CHK-9/","signature":"sig-9"}"#)
        .create_async()
        .await;

    let customer = Customer::new("otieno@example.com")
        .with_name("Otieno", "Ouma")
        .with_country("KE");
    let request = CreateCheckoutRequest::new(1000.0, "KES", customer, "https://shop.example.com")
        .with_api_ref("cart-9");

    let session = fixture
        .client()
        .checkout()
        .create(&CancellationToken::new(), &request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(session.id, "CHK-9");
}

#[tokio::test]
async fn test_checkout_status() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/payment/status/")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({
            "signature": "sig-9",
            "checkout_id": "CHK-9",
            "invoice_id": "INV-9"
        })))
        .with_status(200)
        .with_body(r#"{"invoice":{"invoice_id":"INV-9","state":"PROCESSING"}}"#)
        .create_async()
        .await;

    let status = fixture
        .client()
        .checkout()
        .status(
            &CancellationToken::new(),
            &CheckoutStatusRequest::new("sig-9", "CHK-9", "INV-9"),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(status.invoice.unwrap().state, PaymentState::Processing);
}
