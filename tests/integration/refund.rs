use intasend::refund::{CreateChargebackRequest, RefundReason};
use intasend::CancellationToken;
use mockito::Matcher;
use serde_json::json;

use crate::mock_server::{MockServerFixture, SECRET_KEY};

const CHARGEBACK: &str = r#"{"chargeback_id":"CB-1","invoice":"INV-1","amount":100.0,"status":"PENDING","reason":"DUPLICATE","reason_details":"Charged twice","created_at":"2024-06-01T08:00:00Z","updated_at":"2024-06-01T08:00:00Z"}"#;

#[tokio::test]
async fn test_create_chargeback() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/chargebacks/")
        .match_header("authorization", format!("Bearer {}", SECRET_KEY).as_str())
        .match_body(Matcher::Json(json!({
            "invoice": "INV-1",
            "amount": 100.0,
            "reason": "DUPLICATE",
            "reason_details": "Charged twice"
        })))
        .with_status(201)
        .with_body(CHARGEBACK)
        .create_async()
        .await;

    let request = CreateChargebackRequest::new("INV-1", 100.0, RefundReason::DuplicatePayment)
        .with_details("Charged twice");
    let chargeback = fixture
        .client()
        .refund()
        .create(&CancellationToken::new(), &request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(chargeback.reason, Some(RefundReason::DuplicatePayment));
    assert!(chargeback.is_pending());
}

#[tokio::test]
async fn test_list_and_get_chargebacks() {
    let mut fixture = MockServerFixture::new().await;
    let list = fixture
        .mock_json("GET", "/chargebacks/", 200, &format!(r#"{{"results":[{}]}}"#, CHARGEBACK))
        .await;
    let get = fixture.mock_json("GET", "/chargebacks/CB-1/", 200, CHARGEBACK).await;

    let client = fixture.client();
    let cancel = CancellationToken::new();
    let all = client.refund().list(&cancel).await.unwrap();
    assert_eq!(all.results.len(), 1);

    let one = client.refund().get(&cancel, "CB-1").await.unwrap();
    assert_eq!(one.chargeback_id, "CB-1");
    assert_eq!(one.invoice, "INV-1");

    list.assert_async().await;
    get.assert_async().await;
}
