//! Mock HTTP server setup for integration tests

use std::time::Duration;

use intasend::{IntaSendClient, IntaSendClientBuilder};
use mockito::{Mock, Server, ServerGuard};

pub const PUBLIC_KEY: &str = "ISPubKey_test_0f3c9a";
pub const SECRET_KEY: &str = "ISSecretKey_test_7d21be";

/// Test fixture that owns a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Builder pointed at the mock server with both keys and instant retries
    pub fn builder(&self) -> IntaSendClientBuilder {
        IntaSendClient::builder()
            .publishable_key(PUBLIC_KEY)
            .secret_key(SECRET_KEY)
            .base_url(&self.base_url)
            .retry(3, Duration::ZERO)
    }

    pub fn client(&self) -> IntaSendClient {
        self.builder().build().expect("client should build")
    }

    /// Client configured with the publishable key only
    pub fn public_client(&self) -> IntaSendClient {
        IntaSendClient::builder()
            .publishable_key(PUBLIC_KEY)
            .base_url(&self.base_url)
            .retry(3, Duration::ZERO)
            .build()
            .expect("client should build")
    }

    /// Mock returning a JSON body
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}
