use intasend::collection::{ChargeRequest, StatusOptions, StkPushRequest};
use intasend::types::{Customer, PaymentState, Tariff};
use intasend::CancellationToken;
use mockito::Matcher;
use serde_json::json;

use crate::mock_server::{MockServerFixture, PUBLIC_KEY, SECRET_KEY};

#[tokio::test]
async fn test_charge_creates_checkout_page() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/checkout/")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({
            "public_key": PUBLIC_KEY,
            "first_name": "Wanjiku",
            "last_name": "Kamau",
            "email": "wanjiku@example.com",
            "host": "https://shop.example.com",
            "amount": 1500.0,
            "currency": "KES",
            "api_ref": "order-42",
            "redirect_url": "https://shop.example.com/done",
            "card_tarrif": "CUSTOMER-PAYS",
            "mobile_tarrif": "BUSINESS-PAYS"
        })))
        .with_status(200)
        .with_body(r#"{"id":"CHK-1","url":"https://sandbox.intasend.com/checkout/CHK-1/express/","signature":"sig-1"}"#)
        .create_async()
        .await;

    let request = ChargeRequest::new(
        Customer::new("wanjiku@example.com").with_name("Wanjiku", "Kamau"),
        "https://shop.example.com",
        1500.0,
        "KES",
    )
    .with_api_ref("order-42")
    .with_redirect_url("https://shop.example.com/done")
    .with_tariffs(Tariff::CustomerPays, Tariff::BusinessPays);

    let session = fixture
        .public_client()
        .collection()
        .charge(&CancellationToken::new(), &request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(session.id, "CHK-1");
    assert_eq!(session.signature, "sig-1");
    assert!(session.url.ends_with("/express/"));
}

#[tokio::test]
async fn test_mpesa_stk_push() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/payment/mpesa-stk-push/")
        .match_header("authorization", format!("Bearer {}", SECRET_KEY).as_str())
        .match_body(Matcher::PartialJson(json!({
            "public_key": PUBLIC_KEY,
            "phone_number": "254712345678",
            "amount": 10.0,
            "api_ref": "order-7",
            "method": "M-PESA",
            "currency": "KES"
        })))
        .with_status(200)
        .with_body(r#"{"invoice":{"invoice_id":"INV-7","state":"PENDING","provider":"M-PESA","value":10.0,"account":"254712345678","api_ref":"order-7","created_at":"2024-03-01T09:15:00+03:00"},"customer":{"customer_id":"C-1","phone_number":"254712345678","email":"","first_name":"","last_name":""}}"#)
        .create_async()
        .await;

    let request = StkPushRequest::new("254712345678", 10.0).with_api_ref("order-7");
    let resp = fixture
        .client()
        .collection()
        .mpesa_stk_push(&CancellationToken::new(), &request)
        .await
        .unwrap();

    mock.assert_async().await;
    let invoice = resp.invoice.unwrap();
    assert_eq!(invoice.invoice_id, "INV-7");
    assert_eq!(invoice.state, PaymentState::Pending);
    assert!(invoice.created_at.is_some());
    assert_eq!(resp.customer.unwrap().customer_id, "C-1");
}

#[tokio::test]
async fn test_stk_push_response_with_nulls_is_success() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json(
            "POST",
            "/payment/mpesa-stk-push/",
            200,
            r#"{"invoice":{"invoice_id":"INV-8","state":"PENDING","provider":"M-PESA","value":10.0,"account":"254712345678","api_ref":null,"failed_reason":null,"created_at":"2024-03-01T09:15:00Z","updated_at":null},"customer":null}"#,
        )
        .await;

    let resp = fixture
        .client()
        .collection()
        .mpesa_stk_push(
            &CancellationToken::new(),
            &StkPushRequest::new("254712345678", 10.0),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    let invoice = resp.invoice.unwrap();
    assert_eq!(invoice.invoice_id, "INV-8");
    assert_eq!(invoice.api_ref, "");
    assert!(resp.customer.is_none());
}

#[tokio::test]
async fn test_status_with_checkout_identifiers() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/payment/status/")
        .match_body(Matcher::Json(json!({
            "invoice_id": "INV-3",
            "public_key": PUBLIC_KEY,
            "checkout_id": "CHK-3",
            "signature": "sig-3"
        })))
        .with_status(200)
        .with_body(r#"{"invoice":{"invoice_id":"INV-3","state":"FAILED","failed_reason":"Insufficient balance"}}"#)
        .create_async()
        .await;

    let options = StatusOptions::checkout("CHK-3", "sig-3");
    let status = fixture
        .public_client()
        .collection()
        .status(&CancellationToken::new(), "INV-3", Some(&options))
        .await
        .unwrap();

    mock.assert_async().await;
    let invoice = status.invoice.unwrap();
    assert_eq!(invoice.state, PaymentState::Failed);
    assert_eq!(invoice.failed_reason.as_deref(), Some("Insufficient balance"));
}
