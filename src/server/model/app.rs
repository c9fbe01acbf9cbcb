use chrono::Duration;
use sea_orm::DatabaseConnection;

use crate::server::sms::SmsGateway;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Gateway used to deliver login codes
    pub sms: SmsGateway,
    /// How long an issued one-time passcode stays valid
    pub otp_ttl: Duration,
}
