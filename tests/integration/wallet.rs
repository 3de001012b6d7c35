use intasend::types::Customer;
use intasend::wallet::{
    CreateWalletRequest, FundCheckoutRequest, FundMpesaRequest, IntraTransferRequest, WalletType,
};
use intasend::CancellationToken;
use mockito::Matcher;
use serde_json::json;

use crate::mock_server::{MockServerFixture, PUBLIC_KEY, SECRET_KEY};

#[tokio::test]
async fn test_create_wallet_defaults_to_working() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/wallets/")
        .match_header("authorization", format!("Bearer {}", SECRET_KEY).as_str())
        .match_body(Matcher::Json(json!({
            "currency": "KES",
            "label": "marketing",
            "wallet_type": "WORKING"
        })))
        .with_status(201)
        .with_body(r#"{"wallet_id":"W2","label":"marketing","currency":"KES","wallet_type":"WORKING","current_balance":0,"available_balance":0,"can_disburse":false}"#)
        .create_async()
        .await;

    let wallet = fixture
        .client()
        .wallet()
        .create(&CancellationToken::new(), &CreateWalletRequest::new("KES", "marketing"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(wallet.wallet_id, "W2");
    assert_eq!(wallet.wallet_type, WalletType::Working);
}

#[tokio::test]
async fn test_get_and_transactions() {
    let mut fixture = MockServerFixture::new().await;
    let get = fixture
        .mock_json(
            "GET",
            "/wallets/W1/",
            200,
            r#"{"wallet_id":"W1","label":"ops","currency":"KES","wallet_type":"SETTLEMENT","current_balance":50.0,"available_balance":45.0,"can_disburse":true}"#,
        )
        .await;
    let transactions = fixture
        .mock_json(
            "GET",
            "/wallets/W1/transactions/",
            200,
            r#"{"results":[{"transaction_id":"T1","wallet_id":"W1","trans_type":"SALE","amount":50.0,"narrative":"Payment","running_balance":50.0,"created_at":"2024-05-05T10:00:00Z"}]}"#,
        )
        .await;

    let client = fixture.client();
    let cancel = CancellationToken::new();
    let wallet = client.wallet().get(&cancel, "W1").await.unwrap();
    assert_eq!(wallet.wallet_type, WalletType::Settlement);

    let history = client.wallet().transactions(&cancel, "W1").await.unwrap();
    assert_eq!(history.results[0].trans_type, "SALE");
    assert_eq!(history.results[0].running_balance, 50.0);

    get.assert_async().await;
    transactions.assert_async().await;
}

#[tokio::test]
async fn test_intra_transfer() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/wallets/W-SRC/intra_transfer/")
        .match_header("authorization", format!("Bearer {}", SECRET_KEY).as_str())
        .match_body(Matcher::Json(json!({
            "wallet_id": "W-DST",
            "amount": 250.0,
            "narrative": "Float"
        })))
        .with_status(200)
        .with_body(r#"{"status":"Completed","origin_wallet_id":"W-SRC","target_wallet_id":"W-DST","amount":250.0,"narrative":"Float"}"#)
        .create_async()
        .await;

    let resp = fixture
        .client()
        .wallet()
        .intra_transfer(
            &CancellationToken::new(),
            &IntraTransferRequest::new("W-SRC", "W-DST", 250.0, "Float"),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.origin_id, "W-SRC");
    assert_eq!(resp.target_id, "W-DST");
}

#[tokio::test]
async fn test_fund_mpesa_uses_public_key_only() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/payment/mpesa-stk-push/")
        .match_header("authorization", Matcher::Missing)
        .match_header("x-intasend-public-api-key", PUBLIC_KEY)
        .match_body(Matcher::Json(json!({
            "public_key": PUBLIC_KEY,
            "wallet_id": "W1",
            "phone_number": "254712345678",
            "amount": 300.0,
            "method": "M-PESA",
            "currency": "KES"
        })))
        .with_status(200)
        .with_body(r#"{"invoice":{"invoice_id":"INV-F","state":"NEW"}}"#)
        .create_async()
        .await;

    let resp = fixture
        .client()
        .wallet()
        .fund_mpesa(
            &CancellationToken::new(),
            &FundMpesaRequest::new("W1", "254712345678", 300.0),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.invoice.unwrap().invoice_id, "INV-F");
}

#[tokio::test]
async fn test_fund_checkout() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/checkout/")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({
            "public_key": PUBLIC_KEY,
            "wallet_id": "W1",
            "amount": 900.0,
            "currency": "KES",
            "email": "finance@example.com",
            "host": "https://shop.example.com",
            "redirect_url": "https://shop.example.com/wallet"
        })))
        .with_status(200)
        .with_body(r#"{"id":"CHK-W","url":"https://sandbox.intasend.com/checkout/CHK-W/","signature":"sig-w"}"#)
        .create_async()
        .await;

    let request = FundCheckoutRequest::new(
        "W1",
        900.0,
        "KES",
        Customer::new("finance@example.com"),
        "https://shop.example.com",
    )
    .with_redirect_url("https://shop.example.com/wallet");
    let session = fixture
        .client()
        .wallet()
        .fund_checkout(&CancellationToken::new(), &request)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(session.signature, "sig-w");
}
