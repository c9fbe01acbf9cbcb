//! Outbound SMS delivery through an HTTP gateway.

use serde::Serialize;

use crate::server::error::{sms::SmsError, Error};

#[derive(Serialize)]
struct SmsMessage<'a> {
    to: &'a str,
    message: &'a str,
}

/// Client for the SMS gateway used to deliver login codes
#[derive(Clone)]
pub struct SmsGateway {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl SmsGateway {
    /// Creates a gateway client posting to `url` with the given API key
    pub fn new(client: reqwest::Client, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    /// Sends `message` to the phone number `to`.
    ///
    /// # Returns
    /// - `Ok(())` - Gateway accepted the message with a 2xx status
    /// - `Err(Error::SmsError(SmsError::Rejected))` - Gateway answered with any other status
    /// - `Err(Error::HttpClientError)` - Gateway could not be reached
    pub async fn send(&self, to: &str, message: &str) -> Result<(), Error> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&SmsMessage { to, message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SmsError::Rejected(status.as_u16()).into());
        }

        tracing::debug!("SMS queued for {}", to);

        Ok(())
    }
}
