//! Test utilities for building application state and reading responses

use axum::{body::to_bytes, response::Response};
use bazaar::server::{model::app::AppState, sms::SmsGateway};
use bazaar_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create AppState pointing at the mock SMS gateway
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            sms: SmsGateway::new(
                reqwest::Client::new(),
                self.sms_gateway_url(),
                self.sms_api_key(),
            ),
            otp_ttl: chrono::Duration::seconds(300),
        }
    }
}

/// Deserializes the JSON body of a handler response
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
