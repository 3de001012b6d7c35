use intasend::payout::{
    AirtimeRequest, ApprovalStatus, ApproveRequest, B2bTransaction, BankRequest, BankTransaction,
    InitiateRequest, IntaSendTransferRequest, MpesaB2bRequest, MpesaRequest, Provider,
    Transaction, STATUS_PENDING,
};
use intasend::CancellationToken;
use mockito::Matcher;
use serde_json::json;

use crate::mock_server::{MockServerFixture, SECRET_KEY};

const INITIATED: &str = r#"{"tracking_id":"TRK-1","status":"Preview and approve","nonce":"n0nce","wallet_id":"W1","transactions":[{"status":"Pending","request_ref_id":"REF-1","name":"","account":"254712345678","amount":"100","narrative":"Salary"}],"created_at":"2024-04-02T12:00:00Z"}"#;

async fn mock_initiate(fixture: &mut MockServerFixture, body: serde_json::Value) -> mockito::Mock {
    fixture
        .server
        .mock("POST", "/send-money/initiate/")
        .match_header("authorization", format!("Bearer {}", SECRET_KEY).as_str())
        .match_body(Matcher::PartialJson(body))
        .with_status(200)
        .with_body(INITIATED)
        .create_async()
        .await
}

#[tokio::test]
async fn test_initiate_sends_request_as_given() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/send-money/initiate/")
        .match_body(Matcher::Json(json!({
            "provider": "MPESA-B2C",
            "currency": "KES",
            "transactions": [{"account": "254712345678", "amount": "100"}]
        })))
        .with_status(200)
        .with_body(INITIATED)
        .create_async()
        .await;

    let request = InitiateRequest::new(
        Provider::MpesaB2c,
        "KES",
        vec![Transaction::new("254712345678", "100")],
    );
    let resp = fixture
        .client()
        .payout()
        .initiate(&CancellationToken::new(), &request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.tracking_id, "TRK-1");
    assert_eq!(resp.transactions[0].status, STATUS_PENDING);
    assert!(resp.created_at.is_some());
}

#[tokio::test]
async fn test_mpesa_payout_defaults_to_approval() {
    let mut fixture = MockServerFixture::new().await;
    let mock = mock_initiate(
        &mut fixture,
        json!({
            "provider": "MPESA-B2C",
            "requires_approval": "YES",
            "transactions": [{"account": "254712345678", "amount": "100", "narrative": "Salary"}]
        }),
    )
    .await;

    let request = MpesaRequest::new(
        "KES",
        vec![Transaction::new("254712345678", "100").with_narrative("Salary")],
    );
    fixture
        .client()
        .payout()
        .mpesa(&CancellationToken::new(), &request)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_b2b_payout() {
    let mut fixture = MockServerFixture::new().await;
    let mock = mock_initiate(
        &mut fixture,
        json!({
            "provider": "MPESA-B2B",
            "requires_approval": "NO",
            "transactions": [
                {"account": "247247", "account_type": "PayBill", "account_reference": "1001200010", "amount": "2000"},
                {"account": "5551234", "account_type": "TillNumber", "amount": "300"}
            ]
        }),
    )
    .await;

    let request = MpesaB2bRequest::new(
        "KES",
        vec![
            B2bTransaction::paybill("247247", "1001200010", "2000"),
            B2bTransaction::till("5551234", "300"),
        ],
    )
    .with_approval(ApprovalStatus::No);
    fixture
        .client()
        .payout()
        .mpesa_b2b(&CancellationToken::new(), &request)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_bank_payout() {
    let mut fixture = MockServerFixture::new().await;
    let mock = mock_initiate(
        &mut fixture,
        json!({
            "provider": "PESALINK",
            "wallet_id": "W-SETTLE",
            "transactions": [{"name": "Jane Doe", "account": "0123456789", "bank_code": "2", "amount": "5000"}]
        }),
    )
    .await;

    let request = BankRequest::new(
        "KES",
        vec![BankTransaction::new("Jane Doe", "0123456789", "2", "5000")],
    )
    .with_wallet_id("W-SETTLE");
    fixture
        .client()
        .payout()
        .bank(&CancellationToken::new(), &request)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_intasend_and_airtime_payouts() {
    let mut fixture = MockServerFixture::new().await;
    let intasend = mock_initiate(&mut fixture, json!({"provider": "INTASEND"})).await;
    let airtime = mock_initiate(
        &mut fixture,
        json!({"provider": "AIRTIME", "callback_url": "https://shop.example.com/hooks/payout"}),
    )
    .await;

    let client = fixture.client();
    let cancel = CancellationToken::new();
    client
        .payout()
        .intasend(
            &cancel,
            &IntaSendTransferRequest::new("KES", vec![Transaction::new("ops@example.com", "500")]),
        )
        .await
        .unwrap();
    client
        .payout()
        .airtime(
            &cancel,
            &AirtimeRequest::new("KES", vec![Transaction::new("254712345678", "50")])
                .with_callback_url("https://shop.example.com/hooks/payout"),
        )
        .await
        .unwrap();

    intasend.assert_async().await;
    airtime.assert_async().await;
}

#[tokio::test]
async fn test_approve_and_status() {
    let mut fixture = MockServerFixture::new().await;
    let initiate = fixture
        .mock_json("POST", "/send-money/initiate/", 200, INITIATED)
        .await;
    let approve = fixture
        .server
        .mock("POST", "/send-money/approve/")
        .match_header("authorization", format!("Bearer {}", SECRET_KEY).as_str())
        .match_body(Matcher::Json(json!({
            "tracking_id": "TRK-1",
            "nonce": "n0nce",
            "wallet_id": "W1"
        })))
        .with_status(200)
        .with_body(r#"{"tracking_id":"TRK-1","status":"Processing","transactions":[]}"#)
        .create_async()
        .await;
    let status = fixture
        .server
        .mock("POST", "/send-money/status/")
        .match_body(Matcher::Json(json!({"tracking_id": "TRK-1"})))
        .with_status(200)
        .with_body(r#"{"tracking_id":"TRK-1","status":"Failed","transactions":[{"status":"Failed","request_ref_id":"REF-1","account":"254712345678","amount":"100","failed_reason":"Invalid account"}]}"#)
        .create_async()
        .await;

    let client = fixture.client();
    let cancel = CancellationToken::new();
    let initiated = client
        .payout()
        .mpesa(
            &cancel,
            &MpesaRequest::new("KES", vec![Transaction::new("254712345678", "100")]),
        )
        .await
        .unwrap();
    let approved = client
        .payout()
        .approve(&cancel, &ApproveRequest::from(&initiated))
        .await
        .unwrap();
    assert_eq!(approved.status, "Processing");

    let batch = client.payout().status(&cancel, "TRK-1").await.unwrap();
    assert!(batch.is_failed());
    assert_eq!(
        batch.transactions[0].failed_reason.as_deref(),
        Some("Invalid account")
    );

    initiate.assert_async().await;
    approve.assert_async().await;
    status.assert_async().await;
}
