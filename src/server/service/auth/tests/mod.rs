
use bazaar_test_utils::prelude::*;
use chrono::Duration;

use crate::server::sms::SmsGateway;

use super::*;

fn gateway(test: &TestContext) -> SmsGateway {
    SmsGateway::new(
        reqwest::Client::new(),
        test.sms_gateway_url(),
        test.sms_api_key(),
    )
}

fn ttl() -> Duration {
    Duration::seconds(300)
}
