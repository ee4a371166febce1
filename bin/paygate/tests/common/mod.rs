#![allow(dead_code)]

use paygate_core::clients::PaystackClient;
use paygate_primitives::models::app_state::PaystackInfo;
use reqwest::Client;
use wiremock::MockServer;

/// Placeholder credential; never a real key.
pub const TEST_SECRET: &str = "sk_test_fake_paystack_key";

pub fn bearer() -> String {
    format!("Bearer {}", TEST_SECRET)
}

pub fn test_paystack_info(api_url: &str) -> PaystackInfo {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(paygate::utility::logging::setup_logging);

    PaystackInfo::with_secret(TEST_SECRET, api_url)
}

pub fn client_for(server: &MockServer) -> PaystackClient {
    PaystackClient::from_config(Client::new(), &test_paystack_info(&server.uri()))
        .expect("mock server uri is a valid base url")
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|reqs| reqs.len())
        .unwrap_or_default()
}
