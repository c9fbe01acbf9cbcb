//! Standard values used across tests.
//!
//! None of these are real credentials or subscriber numbers.

/// Bearer key the test SMS gateway expects.
pub static TEST_SMS_API_KEY: &str = "sms_api_key";

/// Path the mock SMS gateway accepts messages on.
pub static TEST_SMS_PATH: &str = "/sms/send";

/// Normalized phone number of the default test customer.
pub static TEST_PHONE: &str = "+919876543210";

/// Normalized phone number of the default test seller.
pub static TEST_SELLER_PHONE: &str = "+919812345678";
